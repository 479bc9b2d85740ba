//! Immutable configuration: the conceptual-to-actual column registry, the
//! dataset source registry, KPI thresholds and the facility layout.
//!
//! Everything here is constructed once at startup and passed by reference;
//! nothing is mutated afterwards.

use std::collections::HashMap;

use crate::schema::{
    collaboration, common, concept, downtime, engagement, oee, resilience, safety, spatial,
    stability, stress, tasks, wellbeing,
};

// ── Column registry ─────────────────────────────────────────────────────────

const COLUMN_PAIRS: &[(&str, &str)] = &[
    // Common dimensions
    (concept::DATE, common::DATE),
    (concept::SITE, common::SITE),
    (concept::REGION, common::REGION),
    (concept::DEPARTMENT, common::DEPARTMENT),
    (concept::FUNCTIONAL_CATEGORY, common::FUNCTIONAL_CATEGORY),
    (concept::SHIFT, common::SHIFT),
    // Stability
    (concept::ROTATION_RATE, stability::ROTATION_RATE),
    (concept::RETENTION_6M, stability::RETENTION_6M),
    (concept::RETENTION_12M, stability::RETENTION_12M),
    (concept::RETENTION_18M, stability::RETENTION_18M),
    (concept::HIRES, stability::HIRES),
    (concept::EXITS, stability::EXITS),
    // Safety
    (concept::MONTH, safety::MONTH),
    (concept::INCIDENTS, safety::INCIDENTS),
    (concept::NEAR_MISSES, safety::NEAR_MISSES),
    (concept::DAYS_WITHOUT_ACCIDENTS, safety::DAYS_WITHOUT_ACCIDENTS),
    (concept::ACTIVE_ALERTS, safety::ACTIVE_ALERTS),
    (concept::PRODUCTION_INCIDENT_ID, safety::INCIDENT_ID),
    // Engagement & psychological safety
    (concept::LABOR_CLIMATE_SCORE, engagement::LABOR_CLIMATE_SCORE),
    (concept::ENPS_SCORE, engagement::ENPS),
    (concept::PARTICIPATION_RATE, engagement::PARTICIPATION_RATE),
    (concept::RECOGNITIONS_COUNT, engagement::RECOGNITIONS_COUNT),
    (concept::PSYCH_SAFETY_SCORE, engagement::PSYCH_SAFETY_SCORE),
    (concept::PSYCH_SAFETY_DATE, engagement::PSYCH_SAFETY_DATE),
    // Stress & workload
    (concept::STRESS_LEVEL_SURVEY, stress::STRESS_LEVEL_SURVEY),
    (concept::OVERTIME_HOURS, stress::OVERTIME_HOURS),
    (concept::UNFILLED_SHIFTS, stress::UNFILLED_SHIFTS),
    (concept::WORKLOAD_PERCEPTION, stress::WORKLOAD_PERCEPTION),
    (concept::PSYCHOLOGICAL_SIGNALS, stress::PSYCHOLOGICAL_SIGNALS),
    (concept::PERCEIVED_WORKLOAD, stress::PERCEIVED_WORKLOAD),
    (concept::WORKLOAD_DATE, stress::WORKLOAD_DATE),
    // Task compliance
    (concept::TASK_COMPLIANCE_RATE, tasks::COMPLIANCE_RATE),
    (concept::TASK_DATE, tasks::TASK_DATE),
    // Collaboration & team cohesion
    (concept::COLLABORATION_SCORE, collaboration::SCORE),
    (concept::COLLABORATION_DATE, collaboration::ASSESSMENT_DATE),
    (concept::TEAM_COHESION_INDEX, collaboration::COHESION_INDEX),
    (concept::TEAM_COHESION_DATE, collaboration::COHESION_DATE),
    // Well-being
    (concept::WELLBEING_INDEX, wellbeing::INDEX),
    (concept::WELLBEING_DATE, wellbeing::SURVEY_DATE),
    // Downtime
    (concept::DOWNTIME_DURATION, downtime::DURATION_MINUTES),
    (concept::DOWNTIME_CAUSE, downtime::CAUSE),
    (concept::DOWNTIME_DATE, downtime::START_DATE),
    (concept::DOWNTIME_SHIFT, downtime::SHIFT),
    // OEE
    (concept::OEE_AVAILABILITY, oee::AVAILABILITY),
    (concept::OEE_PERFORMANCE, oee::PERFORMANCE),
    (concept::OEE_QUALITY, oee::QUALITY),
    (concept::OEE_OVERALL, oee::OVERALL),
    (concept::OEE_DATE, oee::CALCULATION_DATE),
    // Resilience
    (concept::RESILIENCE_SCORE, resilience::SCORE),
    (concept::RESILIENCE_DATE, resilience::ASSESSMENT_DATE),
    // Spatial dynamics
    (concept::WORKER_X_COORD, spatial::X_COORD),
    (concept::WORKER_Y_COORD, spatial::Y_COORD),
    (concept::WORKER_Z_COORD, spatial::Z_COORD),
    (concept::SPATIAL_TIMESTAMP, spatial::TIMESTAMP),
    (concept::SPATIAL_WORKER_ID, spatial::WORKER_ID),
    (concept::SPATIAL_ZONE, spatial::ZONE),
    (concept::SPATIAL_STATUS, spatial::STATUS),
];

// Engagement radar dimensions, a grouped concept with its own sub-map.
const RADAR_DIMENSIONS: &[(&str, &str)] = &[
    ("initiative", engagement::RADAR_INITIATIVE),
    ("autonomy", engagement::RADAR_AUTONOMY),
    ("recognition", engagement::RADAR_RECOGNITION),
    ("growth", engagement::RADAR_GROWTH),
    ("belonging", engagement::RADAR_BELONGING),
];

/// Read-only lookup from conceptual field keys to actual CSV headers.
///
/// A missing mapping is an [`Option::None`], never a panic; callers log a
/// warning and degrade the corresponding output to "no data".
#[derive(Debug, Clone)]
pub struct ColumnRegistry {
    map: HashMap<&'static str, &'static str>,
}

impl ColumnRegistry {
    pub fn new() -> Self {
        Self {
            map: COLUMN_PAIRS.iter().copied().collect(),
        }
    }

    /// Resolve a conceptual key to the header text expected in source CSVs.
    pub fn actual(&self, concept_key: &str) -> Option<&'static str> {
        self.map.get(concept_key).copied()
    }

    /// The engagement radar sub-map: (dimension id, actual header) pairs.
    pub fn radar_dimensions(&self) -> &'static [(&'static str, &'static str)] {
        RADAR_DIMENSIONS
    }

    pub fn radar_dimension(&self, dimension: &str) -> Option<&'static str> {
        RADAR_DIMENSIONS
            .iter()
            .find(|(key, _)| *key == dimension)
            .map(|(_, actual)| *actual)
    }
}

impl Default for ColumnRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ── Source registry ─────────────────────────────────────────────────────────

/// One tabular data feed: file location plus the conceptual key of its date
/// column, if it has a temporal axis (`safety` carries a textual month label
/// instead, `engagement` has no time axis at all).
#[derive(Debug, Clone, Copy)]
pub struct DatasetSource {
    pub file: &'static str,
    pub date_concept: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DatasetKey {
    Stability,
    Safety,
    Engagement,
    Stress,
    Tasks,
    Collaboration,
    Wellbeing,
    Downtime,
    Oee,
    Resilience,
    PsychSafety,
    TeamCohesion,
    PerceivedWorkload,
    Spatial,
}

impl DatasetKey {
    pub const ALL: [DatasetKey; 14] = [
        DatasetKey::Stability,
        DatasetKey::Safety,
        DatasetKey::Engagement,
        DatasetKey::Stress,
        DatasetKey::Tasks,
        DatasetKey::Collaboration,
        DatasetKey::Wellbeing,
        DatasetKey::Downtime,
        DatasetKey::Oee,
        DatasetKey::Resilience,
        DatasetKey::PsychSafety,
        DatasetKey::TeamCohesion,
        DatasetKey::PerceivedWorkload,
        DatasetKey::Spatial,
    ];

    pub fn source(&self) -> DatasetSource {
        match self {
            DatasetKey::Stability => DatasetSource {
                file: "data/stability_data.csv",
                date_concept: Some(concept::DATE),
            },
            DatasetKey::Safety => DatasetSource {
                file: "data/safety_data.csv",
                date_concept: None,
            },
            DatasetKey::Engagement => DatasetSource {
                file: "data/engagement_data.csv",
                date_concept: None,
            },
            DatasetKey::Stress => DatasetSource {
                file: "data/stress_data.csv",
                date_concept: Some(concept::DATE),
            },
            DatasetKey::Tasks => DatasetSource {
                file: "data/task_compliance_data.csv",
                date_concept: Some(concept::TASK_DATE),
            },
            DatasetKey::Collaboration => DatasetSource {
                file: "data/collaboration_data.csv",
                date_concept: Some(concept::COLLABORATION_DATE),
            },
            DatasetKey::Wellbeing => DatasetSource {
                file: "data/wellbeing_data.csv",
                date_concept: Some(concept::WELLBEING_DATE),
            },
            DatasetKey::Downtime => DatasetSource {
                file: "data/downtime_data.csv",
                date_concept: Some(concept::DOWNTIME_DATE),
            },
            DatasetKey::Oee => DatasetSource {
                file: "data/oee_data.csv",
                date_concept: Some(concept::OEE_DATE),
            },
            DatasetKey::Resilience => DatasetSource {
                file: "data/resilience_data.csv",
                date_concept: Some(concept::RESILIENCE_DATE),
            },
            DatasetKey::PsychSafety => DatasetSource {
                file: "data/psych_safety_data.csv",
                date_concept: Some(concept::PSYCH_SAFETY_DATE),
            },
            DatasetKey::TeamCohesion => DatasetSource {
                file: "data/team_cohesion_data.csv",
                date_concept: Some(concept::TEAM_COHESION_DATE),
            },
            DatasetKey::PerceivedWorkload => DatasetSource {
                file: "data/perceived_workload_data.csv",
                date_concept: Some(concept::WORKLOAD_DATE),
            },
            DatasetKey::Spatial => DatasetSource {
                file: "data/spatial_data.csv",
                date_concept: Some(concept::SPATIAL_TIMESTAMP),
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKey::Stability => "stability",
            DatasetKey::Safety => "safety",
            DatasetKey::Engagement => "engagement",
            DatasetKey::Stress => "stress",
            DatasetKey::Tasks => "tasks",
            DatasetKey::Collaboration => "collaboration",
            DatasetKey::Wellbeing => "wellbeing",
            DatasetKey::Downtime => "downtime",
            DatasetKey::Oee => "oee",
            DatasetKey::Resilience => "resilience",
            DatasetKey::PsychSafety => "psych_safety",
            DatasetKey::TeamCohesion => "team_cohesion",
            DatasetKey::PerceivedWorkload => "perceived_workload",
            DatasetKey::Spatial => "spatial",
        }
    }
}

// ── KPI thresholds ──────────────────────────────────────────────────────────

/// Good / warning / target bounds for one KPI. `max_scale` bounds the gauge
/// axis where the metric has a natural ceiling.
#[derive(Debug, Clone, Copy)]
pub struct KpiThresholds {
    pub good: f64,
    pub warning: f64,
    pub target: f64,
    pub max_scale: Option<f64>,
}

pub mod thresholds {
    use super::KpiThresholds;

    pub const STABILITY_ROTATION_RATE: KpiThresholds = KpiThresholds {
        good: 5.0,
        warning: 10.0,
        target: 3.0,
        max_scale: Some(25.0),
    };
    pub const STABILITY_RETENTION: KpiThresholds = KpiThresholds {
        good: 90.0,
        warning: 80.0,
        target: 95.0,
        max_scale: None,
    };
    pub const SAFETY_DAYS_NO_INCIDENTS: KpiThresholds = KpiThresholds {
        good: 180.0,
        warning: 90.0,
        target: 365.0,
        max_scale: None,
    };
    pub const ENGAGEMENT_CLIMATE_SCORE: KpiThresholds = KpiThresholds {
        good: 8.0,
        warning: 6.5,
        target: 8.5,
        max_scale: Some(10.0),
    };
    pub const ENGAGEMENT_ENPS: KpiThresholds = KpiThresholds {
        good: 50.0,
        warning: 20.0,
        target: 60.0,
        max_scale: Some(100.0),
    };
    pub const ENGAGEMENT_PARTICIPATION: KpiThresholds = KpiThresholds {
        good: 85.0,
        warning: 70.0,
        target: 90.0,
        max_scale: None,
    };
    // "good" is the upper bound of low stress, "warning" of acceptable stress.
    pub const STRESS_LEVEL_PSYCHOSOCIAL: KpiThresholds = KpiThresholds {
        good: 3.0,
        warning: 7.0,
        target: 2.5,
        max_scale: Some(10.0),
    };
    pub const TASK_COMPLIANCE: KpiThresholds = KpiThresholds {
        good: 95.0,
        warning: 85.0,
        target: 98.0,
        max_scale: None,
    };
    pub const COLLABORATION_SCORE: KpiThresholds = KpiThresholds {
        good: 85.0,
        warning: 70.0,
        target: 90.0,
        max_scale: Some(100.0),
    };
    pub const WELLBEING_INDEX: KpiThresholds = KpiThresholds {
        good: 8.0,
        warning: 6.0,
        target: 8.5,
        max_scale: Some(10.0),
    };
    pub const PERCEIVED_WORKLOAD: KpiThresholds = KpiThresholds {
        good: 3.0,
        warning: 7.0,
        target: 2.5,
        max_scale: Some(10.0),
    };
    pub const TOTAL_DOWNTIME_MINUTES: KpiThresholds = KpiThresholds {
        good: 30.0,
        warning: 90.0,
        target: 15.0,
        max_scale: Some(240.0),
    };
    pub const OEE_AVAILABILITY: KpiThresholds = KpiThresholds {
        good: 90.0,
        warning: 80.0,
        target: 95.0,
        max_scale: None,
    };
    pub const OEE_PERFORMANCE: KpiThresholds = KpiThresholds {
        good: 95.0,
        warning: 85.0,
        target: 99.0,
        max_scale: None,
    };
    pub const OEE_QUALITY: KpiThresholds = KpiThresholds {
        good: 99.0,
        warning: 95.0,
        target: 99.9,
        max_scale: None,
    };
    pub const OEE_OVERALL: KpiThresholds = KpiThresholds {
        good: 85.0,
        warning: 75.0,
        target: 90.0,
        max_scale: None,
    };
    pub const RESILIENCE_SCORE: KpiThresholds = KpiThresholds {
        good: 80.0,
        warning: 65.0,
        target: 90.0,
        max_scale: Some(100.0),
    };

    // Radar dimensions share one 0-5 scale and one target.
    pub const ENGAGEMENT_RADAR_DIM_TARGET: f64 = 4.0;
    pub const ENGAGEMENT_RADAR_DIM_SCALE_MAX: f64 = 5.0;
}

// ── Facility layout ─────────────────────────────────────────────────────────

/// Axis-aligned work area on the facility floor, in metres.
#[derive(Debug, Clone, Copy)]
pub struct WorkArea {
    pub name: &'static str,
    pub min: (f64, f64),
    pub max: (f64, f64),
}

#[derive(Debug, Clone, Copy)]
pub struct FacilityPoint {
    pub name: &'static str,
    pub coords: (f64, f64),
}

/// Floor-plan geometry consumed by the spatial panel's overlays.
#[derive(Debug, Clone, Copy)]
pub struct FacilityConfig {
    pub width_m: f64,
    pub height_m: f64,
    pub minutes_per_interval: u32,
    pub work_areas: &'static [WorkArea],
    pub entry_exit_points: &'static [FacilityPoint],
}

pub const FACILITY: FacilityConfig = FacilityConfig {
    width_m: 100.0,
    height_m: 60.0,
    minutes_per_interval: 2,
    work_areas: &[
        WorkArea {
            name: "Assembly Line 1",
            min: (10.0, 5.0),
            max: (70.0, 15.0),
        },
        WorkArea {
            name: "Welding Bay",
            min: (75.0, 20.0),
            max: (95.0, 40.0),
        },
    ],
    entry_exit_points: &[
        FacilityPoint {
            name: "Main Entry",
            coords: (5.0, 30.0),
        },
        FacilityPoint {
            name: "Dock A",
            coords: (95.0, 5.0),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actual_resolves_known_concepts() {
        let registry = ColumnRegistry::new();
        assert_eq!(registry.actual(concept::ROTATION_RATE), Some("Rotation Rate (%)"));
        assert_eq!(registry.actual(concept::SITE), Some("Site"));
        assert_eq!(registry.actual(concept::SPATIAL_TIMESTAMP), Some("Location Timestamp"));
    }

    #[test]
    fn test_actual_unknown_concept_is_none() {
        let registry = ColumnRegistry::new();
        assert_eq!(registry.actual("no_such_concept"), None);
    }

    #[test]
    fn test_radar_sub_map() {
        let registry = ColumnRegistry::new();
        assert_eq!(registry.radar_dimensions().len(), 5);
        assert_eq!(registry.radar_dimension("growth"), Some("Engagement - Growth Opportunities"));
        assert_eq!(registry.radar_dimension("tenacity"), None);
    }

    #[test]
    fn test_source_registry_is_complete_and_distinct() {
        let mut files: Vec<&str> = DatasetKey::ALL.iter().map(|k| k.source().file).collect();
        files.sort();
        files.dedup();
        assert_eq!(files.len(), DatasetKey::ALL.len());
    }

    #[test]
    fn test_date_concepts_resolve_in_column_registry() {
        let registry = ColumnRegistry::new();
        for key in DatasetKey::ALL {
            if let Some(date_concept) = key.source().date_concept {
                assert!(
                    registry.actual(date_concept).is_some(),
                    "date concept of {:?} must be registered",
                    key
                );
            }
        }
    }
}
