use anyhow::Result;
use log::LevelFilter;

use nvectors::{NumericVector, VectorCollection, VectorConfig};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("NVECTORS_LOG", "info"))
        .init();

    let config: VectorConfig = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "full".to_string())
        .parse()
        .map_err(anyhow::Error::msg)?;

    let a = NumericVector::from_vec(vec![1.0f64, 0.0, 0.0])?;
    let b = NumericVector::from_vec(vec![0.0f64, 1.0, 0.0])?;
    let mut v: NumericVector<f64> = NumericVector::new(3)?;
    v.set(0, 3.0)?;
    v.set(1, 4.0)?;

    log::info!("a + b = {}", (&a + &b)?.render(&config));
    log::info!("a x b = {}", a.cross_product(&b)?.render(&config));
    log::info!("|v| = {}", v.norm());
    log::info!("v / |v| = {}", v.normalize()?.render(&config));
    log::info!("proj_a(v) = {}", v.projection(&a)?.render(&config));

    let mut collection: VectorCollection<f64> = VectorCollection::new(3, 2)?;
    *collection.at_mut(0)?.at_mut(0)? = 9.0;
    let shifted = (&collection + &v)?;
    log::info!("collection + v =\n{}", shifted.render(&config));

    if let Err(e) = &v / 0.0 {
        log::warn!("v / 0 rejected: {}", e);
    }

    Ok(())
}
