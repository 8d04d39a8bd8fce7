//! Splitting rows into one trace per continent.

use crate::figure::palette_color;
use cid_data::{Dataset, Observation};

/// Rows of one continent together with its palette color.
#[derive(Debug, Clone)]
pub struct ContinentGroup<'a> {
    pub continent: &'a str,
    pub color: String,
    pub rows: Vec<&'a Observation>,
}

/// Group `rows` by continent, in the dataset's continent order.
///
/// With `keep_empty` every continent gets a group even when none of `rows`
/// belong to it, which keeps the trace count constant across animation
/// frames.
pub fn by_continent<'a>(
    dataset: &'a Dataset,
    rows: &[&'a Observation],
    keep_empty: bool,
) -> Vec<ContinentGroup<'a>> {
    dataset
        .continents()
        .iter()
        .enumerate()
        .filter_map(|(i, continent)| {
            let members: Vec<&Observation> = rows
                .iter()
                .copied()
                .filter(|o| &o.continent == continent)
                .collect();
            if members.is_empty() && !keep_empty {
                return None;
            }
            Some(ContinentGroup {
                continent: continent.as_str(),
                color: palette_color(i),
                rows: members,
            })
        })
        .collect()
}

/// Values of one indicator, `None` where the row has no value.
pub fn values(rows: &[&Observation], indicator: &str) -> Vec<Option<f64>> {
    rows.iter().map(|o| o.value(indicator)).collect()
}

pub fn countries(rows: &[&Observation]) -> Vec<String> {
    rows.iter().map(|o| o.country.clone()).collect()
}

/// Hover template with the hovered name in bold followed by `label=%{ref}`
/// lines, the way Plotly Express formats it.
pub fn hover_template(lines: &[(&str, &str)]) -> String {
    let body: Vec<String> = lines
        .iter()
        .map(|(label, reference)| format!("{}={}", label, reference))
        .collect();
    format!("<b>%{{hovertext}}</b><br><br>{}<extra></extra>", body.join("<br>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Country Name,Indicator Name,Year,Value
Chile,Population density (people per sq. km of land area),1962,10.6
Kenya,Population density (people per sq. km of land area),1962,15.0
Peru,Population density (people per sq. km of land area),1967,9.0
";

    #[test]
    fn groups_follow_dataset_continent_order() {
        let ds = Dataset::from_csv(SAMPLE).unwrap();
        let rows: Vec<&Observation> = ds.observations().iter().collect();
        let groups = by_continent(&ds, &rows, false);
        let names: Vec<&str> = groups.iter().map(|g| g.continent).collect();
        assert_eq!(names, vec!["South America", "Africa"]);
        assert_eq!(groups[0].rows.len(), 2);
        assert_eq!(groups[1].color, palette_color(1));
    }

    #[test]
    fn empty_groups_are_kept_on_request() {
        let ds = Dataset::from_csv(SAMPLE).unwrap();
        let rows = ds.for_year(1967);
        assert_eq!(by_continent(&ds, &rows, false).len(), 1);
        let all = by_continent(&ds, &rows, true);
        assert_eq!(all.len(), 2);
        assert!(all[1].rows.is_empty());
    }

    #[test]
    fn hover_template_lists_fields() {
        assert_eq!(
            hover_template(&[("Continent", "Asia"), ("Year", "%{x}")]),
            "<b>%{hovertext}</b><br><br>Continent=Asia<br>Year=%{x}<extra></extra>"
        );
    }
}
