use geohash_rs::{DistanceMetric, GeoHasher, GeohashError, Position, distance_between};

fn main() -> Result<(), GeohashError> {
    let position = Position::new(31.192911, 121.437013);

    let hasher = GeoHasher::base32(12)?;
    let hash = hasher.encode(&position);
    println!("Hash: {}", hash);

    let decoded = hasher.decode(&hash)?;
    println!("Decoded: {}", decoded);

    let drift = distance_between(&position, &decoded, DistanceMetric::Haversine);
    println!("Drift: {} m", drift);

    let neighborhood = hasher.neighbors(&hash)?;
    println!("North neighbor: {:?}", neighborhood.north);

    let cell = hasher.bounds(&hash)?;
    println!("Cell bounds: {:?}", cell);

    Ok(())
}
