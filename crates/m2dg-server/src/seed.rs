//! Sample data for fresh databases.

use m2dg_platform::{CourtCreate, Platform, Result};
use tracing::info;

fn sample_courts() -> Vec<CourtCreate> {
    vec![
        CourtCreate {
            name: "Downtown Basketball Center".to_string(),
            location: "123 Main St, Downtown".to_string(),
            description: Some("Professional indoor court with premium facilities".to_string()),
            court_type: "indoor".to_string(),
            surface_type: "hardwood".to_string(),
            amenities: vec![
                "locker_rooms".to_string(),
                "parking".to_string(),
                "water_fountain".to_string(),
                "sound_system".to_string(),
            ],
            hourly_rate: 50.0,
            capacity: 20,
            images: vec![],
        },
        CourtCreate {
            name: "Riverside Outdoor Court".to_string(),
            location: "456 River Rd, Riverside Park".to_string(),
            description: Some("Outdoor court with a river view and lighting".to_string()),
            court_type: "outdoor".to_string(),
            surface_type: "concrete".to_string(),
            amenities: vec!["lighting".to_string(), "benches".to_string()],
            hourly_rate: 25.0,
            capacity: 15,
            images: vec![],
        },
    ]
}

/// Insert the sample courts if no court exists yet.
///
/// Returns the number of courts created.
pub async fn seed_sample_courts<P: Platform>(platform: &P) -> Result<usize> {
    if !platform.list_courts().await?.is_empty() {
        return Ok(0);
    }

    let mut created = 0;
    for court in sample_courts() {
        platform.create_court(court).await?;
        created += 1;
    }

    info!(created, "Seeded sample courts");

    Ok(created)
}
