use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy the cleaned case file to OUT_DIR for include_str. Without it the
    // dashboard still builds and shows an empty-data error at runtime.
    let cases_src = Path::new("../fixtures/covid_19_cleaned.csv");
    let cases_dest = Path::new(&out_dir).join("cleaned_cases.csv");
    if cases_src.exists() {
        fs::copy(cases_src, &cases_dest).unwrap();
    } else {
        fs::write(
            &cases_dest,
            "Province/State,Country/Region,Lat,Long,Date,Confirmed,Deaths,Recovered\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/covid_19_cleaned.csv");
}
