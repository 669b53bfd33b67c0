use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of a track table. Owned by the data-access side, read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artists: String,
    pub popularity: u8,
    pub danceability: f64,
    pub energy: f64,
    pub loudness: f64,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
}

/// Numeric track columns that can be plotted or summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Popularity,
    Danceability,
    Energy,
    Loudness,
    Speechiness,
    Acousticness,
    Instrumentalness,
    Liveness,
    Valence,
}

/// Closed interval used for a chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const UNIT: AxisRange = AxisRange { min: 0.0, max: 1.0 };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Metric {
    /// Selector order. The first entry is the fallback metric.
    pub const ALL: [Metric; 9] = [
        Metric::Popularity,
        Metric::Danceability,
        Metric::Energy,
        Metric::Loudness,
        Metric::Speechiness,
        Metric::Acousticness,
        Metric::Instrumentalness,
        Metric::Liveness,
        Metric::Valence,
    ];

    /// Column name as it appears in the track tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Popularity => "popularity",
            Metric::Danceability => "danceability",
            Metric::Energy => "energy",
            Metric::Loudness => "loudness",
            Metric::Speechiness => "speechiness",
            Metric::Acousticness => "acousticness",
            Metric::Instrumentalness => "instrumentalness",
            Metric::Liveness => "liveness",
            Metric::Valence => "valence",
        }
    }

    pub fn value(self, track: &Track) -> f64 {
        match self {
            Metric::Popularity => f64::from(track.popularity),
            Metric::Danceability => track.danceability,
            Metric::Energy => track.energy,
            Metric::Loudness => track.loudness,
            Metric::Speechiness => track.speechiness,
            Metric::Acousticness => track.acousticness,
            Metric::Instrumentalness => track.instrumentalness,
            Metric::Liveness => track.liveness,
            Metric::Valence => track.valence,
        }
    }

    /// Fixed y-axis range for bar charts.
    pub fn axis_range(self) -> AxisRange {
        match self {
            Metric::Popularity => AxisRange::new(0.0, 100.0),
            Metric::Loudness => AxisRange::new(-60.0, 0.0),
            _ => AxisRange::UNIT,
        }
    }

    /// Decimal places used when a statistic of this column is displayed.
    pub fn precision(self) -> usize {
        match self {
            Metric::Popularity => 0,
            Metric::Loudness => 1,
            _ => 3,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .iter()
            .copied()
            .find(|metric| metric.as_str() == value)
            .ok_or_else(|| format!("unknown metric {value:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_parses_only_exact_column_names() {
        assert_eq!("valence".parse::<Metric>(), Ok(Metric::Valence));
        assert!("Valence".parse::<Metric>().is_err());
        assert!("tempo".parse::<Metric>().is_err());
    }

    #[test]
    fn popularity_is_the_first_enumerated_metric() {
        assert_eq!(Metric::ALL[0], Metric::Popularity);
        assert_eq!(Metric::ALL.len(), 9);
    }

    #[test]
    fn axis_ranges_follow_column_scale() {
        assert_eq!(Metric::Popularity.axis_range(), AxisRange::new(0.0, 100.0));
        assert_eq!(Metric::Loudness.axis_range(), AxisRange::new(-60.0, 0.0));
        assert_eq!(Metric::Liveness.axis_range(), AxisRange::UNIT);
    }

    #[test]
    fn metric_serializes_as_column_name() {
        let json = serde_json::to_string(&Metric::Instrumentalness).unwrap();
        assert_eq!(json, "\"instrumentalness\"");
    }
}
