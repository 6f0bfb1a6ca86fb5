//! Runs the sol long range profile and prints the rendered configuration.

use radioconf_model::{Family, Model};
use radioconf_profiles::long_range::LongRangeSol;
use radioconf_profiles::profile::Profile;

fn main() {
    let mut model = Model::new(Family::Sol);
    let outputs = LongRangeSol::new().configure(&mut model).unwrap();

    println!("# long_range ({})", model.family());
    for entry in &outputs {
        println!("{entry}");
    }
}
