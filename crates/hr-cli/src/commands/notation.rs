use rand::rngs::StdRng;

use hr_mechanics::RollSpec;

use crate::render;

pub fn run(spec: &str, verbose: bool, rng: &mut StdRng) -> Result<(), String> {
    let spec = RollSpec::parse(spec).map_err(|e| e.to_string())?;
    let result = spec.roll(rng);
    println!("{}", render::roll(&result, verbose));
    Ok(())
}
