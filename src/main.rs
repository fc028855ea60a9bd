use geokey_rs::{GeoKeyError, bit_position_for, create_bounding_box, distance_km};

fn main() -> Result<(), GeoKeyError> {
    let berlin = (52.5, 13.4);
    let london = (51.5, -0.1);

    let dist = distance_km(&berlin, &london);
    println!("Berlin -> London: {:.1} km", dist);

    let bbox = create_bounding_box(berlin.0, berlin.1, 10.0)?;
    println!("10 km box around Berlin: {:?}", bbox);

    println!("Spatial-key bit position for {:.1} km: {}", dist, bit_position_for(dist));

    Ok(())
}
