use edacore::dataset::{DatasetName, Track, TrackSource};
use edacore::prelude::CoreResult;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const TITLE_WORDS: [&str; 16] = [
    "Midnight", "Golden", "Echo", "River", "Neon", "Velvet", "Summer", "Static", "Paper",
    "Satellite", "Wild", "Glass", "Ocean", "Ember", "Silver", "Highway",
];
const TITLE_NOUNS: [&str; 12] = [
    "Heart", "Lights", "Dreams", "Signal", "Rain", "Parade", "Motel", "Garden", "Fever", "Skyline",
    "Letters", "Tide",
];
const ARTISTS: [&str; 12] = [
    "The Lanterns", "Mara Quell", "North Static", "Juno Park", "Idle Season", "Kaia Brooks",
    "Low Orbit", "Tomas Reyes", "Paper Kites Club", "Velour", "Sunny Habit", "Ada Vance",
];

/// Sizes and seed for the synthetic track tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub my_tracks: usize,
    pub usa_tracks: usize,
    pub global_tracks: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            my_tracks: 100,
            usa_tracks: 50,
            global_tracks: 50,
        }
    }
}

impl GeneratorConfig {
    fn size_of(&self, name: DatasetName) -> usize {
        match name {
            DatasetName::MyTracks => self.my_tracks,
            DatasetName::UsaTracks => self.usa_tracks,
            DatasetName::GlobalTracks => self.global_tracks,
            DatasetName::AllTracks => self.my_tracks + self.usa_tracks + self.global_tracks,
        }
    }

    fn seed_for(&self, name: DatasetName) -> u64 {
        let offset = match name {
            DatasetName::AllTracks | DatasetName::MyTracks => 1,
            DatasetName::UsaTracks => 2,
            DatasetName::GlobalTracks => 3,
        };
        self.seed.wrapping_mul(31).wrapping_add(offset)
    }
}

/// Track source that fabricates plausible tables from a seed.
///
/// `All Tracks` is the concatenation of the other three tables, like the
/// combined export it stands in for.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    config: GeneratorConfig,
}

impl SyntheticSource {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    fn build_table(&self, name: DatasetName) -> Vec<Track> {
        let mut rng = StdRng::seed_from_u64(self.config.seed_for(name));
        (0..self.config.size_of(name))
            .map(|_| build_track(&mut rng))
            .collect()
    }
}

impl TrackSource for SyntheticSource {
    fn load(&self, name: DatasetName) -> CoreResult<Vec<Track>> {
        if name != DatasetName::AllTracks {
            return Ok(self.build_table(name));
        }
        let mut combined = Vec::with_capacity(self.config.size_of(name));
        for part in [
            DatasetName::MyTracks,
            DatasetName::UsaTracks,
            DatasetName::GlobalTracks,
        ] {
            combined.extend(self.build_table(part));
        }
        Ok(combined)
    }
}

fn build_track(rng: &mut StdRng) -> Track {
    let title = format!(
        "{} {}",
        TITLE_WORDS[rng.gen_range(0..TITLE_WORDS.len())],
        TITLE_NOUNS[rng.gen_range(0..TITLE_NOUNS.len())]
    );
    let energy: f64 = rng.gen_range(0.15..1.0);
    let acousticness = ((1.0 - energy) * rng.gen_range(0.4..1.0)).clamp(0.0, 1.0);
    // Heavier tail toward quiet tracks.
    let loudness = -3.0 - (1.0 - energy) * rng.gen_range(2.0..25.0) - rng.gen_range(0.0..4.0);

    Track {
        name: title,
        artists: ARTISTS[rng.gen_range(0..ARTISTS.len())].to_string(),
        popularity: rng.gen_range(20..=100),
        danceability: rng.gen_range(0.25..0.95),
        energy,
        loudness: loudness.max(-60.0),
        speechiness: rng.gen_range(0.0f64..1.0).powi(3) * 0.5,
        acousticness,
        instrumentalness: rng.gen_range(0.0f64..1.0).powi(6),
        liveness: rng.gen_range(0.03..0.6),
        valence: rng.gen_range(0.05..0.95),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edacore::dataset::{DatasetCatalog, Metric};

    #[test]
    fn generator_builds_configured_table_sizes() {
        let source = SyntheticSource::new(GeneratorConfig {
            seed: 4,
            my_tracks: 12,
            usa_tracks: 5,
            global_tracks: 7,
        });
        let catalog = DatasetCatalog::load(&source).unwrap();
        assert_eq!(catalog.get(DatasetName::MyTracks).len(), 12);
        assert_eq!(catalog.get(DatasetName::UsaTracks).len(), 5);
        assert_eq!(catalog.get(DatasetName::GlobalTracks).len(), 7);
        assert_eq!(catalog.get(DatasetName::AllTracks).len(), 24);
    }

    #[test]
    fn all_tracks_concatenates_the_other_tables() {
        let source = SyntheticSource::new(GeneratorConfig::default());
        let all = source.load(DatasetName::AllTracks).unwrap();
        let mine = source.load(DatasetName::MyTracks).unwrap();
        let global = source.load(DatasetName::GlobalTracks).unwrap();
        assert_eq!(&all[..mine.len()], &mine[..]);
        assert_eq!(&all[all.len() - global.len()..], &global[..]);
    }

    #[test]
    fn generated_values_stay_in_column_ranges() {
        let source = SyntheticSource::new(GeneratorConfig {
            seed: 99,
            ..Default::default()
        });
        let tracks = source.load(DatasetName::AllTracks).unwrap();
        for track in &tracks {
            assert!(track.popularity <= 100);
            assert!(Metric::Loudness.axis_range().contains(track.loudness));
            for metric in &Metric::ALL[1..] {
                if *metric != Metric::Loudness {
                    assert!(metric.axis_range().contains(metric.value(track)), "{metric}");
                }
            }
        }
    }

    #[test]
    fn same_seed_replays_identically() {
        let config = GeneratorConfig {
            seed: 13,
            ..Default::default()
        };
        let first = SyntheticSource::new(config.clone()).load(DatasetName::UsaTracks).unwrap();
        let second = SyntheticSource::new(config).load(DatasetName::UsaTracks).unwrap();
        assert_eq!(first, second);
    }
}
