use std::env;
use std::fs;
use std::path::Path;

/// Copy a fixture CSV into OUT_DIR for include_str!, falling back to a
/// minimal single-row table when the fixture is absent so the app still
/// builds from a bare checkout.
fn copy_fixture(out_dir: &str, name: &str, fallback: &str) {
    let src = Path::new("../fixtures").join(name);
    let dest = Path::new(out_dir).join(name);
    if src.exists() {
        fs::copy(&src, &dest).unwrap();
    } else {
        fs::write(&dest, fallback).unwrap();
    }
    println!("cargo:rerun-if-changed=../fixtures/{}", name);
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    copy_fixture(
        &out_dir,
        "monthly.csv",
        "STATE,DATE,MF_num,HIGHWAY_GALLONS\nAlabama,2021-01-01,1,221304000\n",
    );
    copy_fixture(
        &out_dir,
        "quarterly_states.csv",
        "STATE,DATE,MF_num,HIGHWAY_GALLONS\nAlabama,2021-01-01,1,650000000\n",
    );
    copy_fixture(
        &out_dir,
        "quarterly_nation.csv",
        "DATE,MF_num,HIGHWAY_GALLONS\n2021-01-01,1,33100000000\n",
    );
    copy_fixture(
        &out_dir,
        "state_codes.csv",
        "StateName,code\nAlabama,1\n",
    );

    println!("cargo:rerun-if-changed=build.rs");
}
