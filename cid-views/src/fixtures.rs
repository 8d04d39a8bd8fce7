//! Small dataset shared by the view tests.

use cid_data::Dataset;

pub const SAMPLE_CSV: &str = "\
Country Name,Indicator Name,Year,Value
Chile,CO2 emissions (metric tons per capita),2002,3.5
Chile,\"Fertility rate, total (births per woman)\",2002,2.0
Chile,GDP growth (annual %),2002,2.2
Chile,\"Life expectancy at birth, total (years)\",2002,77.2
Chile,Population density (people per sq. km of land area),2002,21.2
Chile,CO2 emissions (metric tons per capita),2007,4.2
Chile,\"Fertility rate, total (births per woman)\",2007,1.9
Chile,GDP growth (annual %),2007,5.2
Chile,\"Life expectancy at birth, total (years)\",2007,78.3
Chile,Population density (people per sq. km of land area),2007,22.3
Kenya,CO2 emissions (metric tons per capita),2002,0.2
Kenya,\"Fertility rate, total (births per woman)\",2002,5.0
Kenya,GDP growth (annual %),2002,0.5
Kenya,\"Life expectancy at birth, total (years)\",2002,52.0
Kenya,Population density (people per sq. km of land area),2002,56.0
Kenya,CO2 emissions (metric tons per capita),2007,0.3
Kenya,GDP growth (annual %),2007,6.9
Kenya,\"Life expectancy at birth, total (years)\",2007,57.0
Kenya,Population density (people per sq. km of land area),2007,65.0
United States,CO2 emissions (metric tons per capita),2002,19.6
United States,\"Fertility rate, total (births per woman)\",2002,2.0
United States,GDP growth (annual %),2002,1.8
United States,\"Life expectancy at birth, total (years)\",2002,77.0
United States,Population density (people per sq. km of land area),2002,31.3
United States,CO2 emissions (metric tons per capita),2007,19.2
United States,\"Fertility rate, total (births per woman)\",2007,2.1
United States,GDP growth (annual %),2007,1.8
United States,\"Life expectancy at birth, total (years)\",2007,78.0
United States,Population density (people per sq. km of land area),2007,32.9
World,CO2 emissions (metric tons per capita),2007,4.6
World,Population density (people per sq. km of land area),2007,52.0
";

pub fn sample() -> Dataset {
    Dataset::from_csv(SAMPLE_CSV).expect("sample dataset loads")
}
