//! Column-name constants for the dashboard schema.
//! Single source of truth for conceptual field keys and the CSV header text
//! they resolve to via [`crate::config::ColumnRegistry`].

// ── Conceptual field keys ───────────────────────────────────────────────────
// Stable symbolic names, never shown to users and never changed at runtime.
pub mod concept {
    // Common dimensions
    pub const DATE: &str = "date";
    pub const SITE: &str = "site";
    pub const REGION: &str = "region";
    pub const DEPARTMENT: &str = "department";
    pub const FUNCTIONAL_CATEGORY: &str = "fc";
    pub const SHIFT: &str = "shift";

    // Stability
    pub const ROTATION_RATE: &str = "rotation_rate";
    pub const RETENTION_6M: &str = "retention_6m";
    pub const RETENTION_12M: &str = "retention_12m";
    pub const RETENTION_18M: &str = "retention_18m";
    pub const HIRES: &str = "hires";
    pub const EXITS: &str = "exits";

    // Safety
    pub const MONTH: &str = "month";
    pub const INCIDENTS: &str = "incidents";
    pub const NEAR_MISSES: &str = "near_misses";
    pub const DAYS_WITHOUT_ACCIDENTS: &str = "days_without_accidents";
    pub const ACTIVE_ALERTS: &str = "active_alerts";
    pub const PRODUCTION_INCIDENT_ID: &str = "production_incident_id";

    // Engagement & psychological safety
    pub const LABOR_CLIMATE_SCORE: &str = "labor_climate_score";
    pub const ENPS_SCORE: &str = "enps_score";
    pub const PARTICIPATION_RATE: &str = "participation_rate";
    pub const RECOGNITIONS_COUNT: &str = "recognitions_count";
    pub const PSYCH_SAFETY_SCORE: &str = "psych_safety_score";
    pub const PSYCH_SAFETY_DATE: &str = "psych_safety_date";

    // Stress & workload
    pub const STRESS_LEVEL_SURVEY: &str = "stress_level_survey";
    pub const OVERTIME_HOURS: &str = "overtime_hours";
    pub const UNFILLED_SHIFTS: &str = "unfilled_shifts";
    pub const WORKLOAD_PERCEPTION: &str = "workload_perception";
    pub const PSYCHOLOGICAL_SIGNALS: &str = "psychological_signals";
    pub const PERCEIVED_WORKLOAD: &str = "perceived_workload";
    pub const WORKLOAD_DATE: &str = "workload_date";

    // Task compliance
    pub const TASK_COMPLIANCE_RATE: &str = "task_compliance_rate";
    pub const TASK_DATE: &str = "task_date";

    // Collaboration & team cohesion
    pub const COLLABORATION_SCORE: &str = "collaboration_score";
    pub const COLLABORATION_DATE: &str = "collaboration_date";
    pub const TEAM_COHESION_INDEX: &str = "team_cohesion_index";
    pub const TEAM_COHESION_DATE: &str = "team_cohesion_date";

    // Well-being
    pub const WELLBEING_INDEX: &str = "wellbeing_index";
    pub const WELLBEING_DATE: &str = "wellbeing_date";

    // Downtime
    pub const DOWNTIME_DURATION: &str = "downtime_duration";
    pub const DOWNTIME_CAUSE: &str = "downtime_cause";
    pub const DOWNTIME_DATE: &str = "downtime_date";
    pub const DOWNTIME_SHIFT: &str = "downtime_shift";

    // OEE
    pub const OEE_AVAILABILITY: &str = "oee_availability";
    pub const OEE_PERFORMANCE: &str = "oee_performance";
    pub const OEE_QUALITY: &str = "oee_quality";
    pub const OEE_OVERALL: &str = "oee_overall";
    pub const OEE_DATE: &str = "oee_date";

    // Resilience
    pub const RESILIENCE_SCORE: &str = "resilience_score";
    pub const RESILIENCE_DATE: &str = "resilience_date";

    // Spatial dynamics
    pub const WORKER_X_COORD: &str = "worker_x_coord";
    pub const WORKER_Y_COORD: &str = "worker_y_coord";
    pub const WORKER_Z_COORD: &str = "spatial_z_coord";
    pub const SPATIAL_TIMESTAMP: &str = "spatial_timestamp";
    pub const SPATIAL_WORKER_ID: &str = "spatial_worker_id";
    pub const SPATIAL_ZONE: &str = "spatial_zone";
    pub const SPATIAL_STATUS: &str = "spatial_status";
}

// ── Actual CSV headers ──────────────────────────────────────────────────────
// Human-readable labels; a rename in a source file silently degrades the
// corresponding conceptual field to "no data".

pub mod common {
    pub const DATE: &str = "Date";
    pub const SITE: &str = "Site";
    pub const REGION: &str = "Region";
    pub const DEPARTMENT: &str = "Department";
    pub const FUNCTIONAL_CATEGORY: &str = "Functional Category";
    pub const SHIFT: &str = "Shift";
}

pub mod stability {
    pub const ROTATION_RATE: &str = "Rotation Rate (%)";
    pub const RETENTION_6M: &str = "6-Month Retention (%)";
    pub const RETENTION_12M: &str = "12-Month Retention (%)";
    pub const RETENTION_18M: &str = "18-Month Retention (%)";
    pub const HIRES: &str = "Hires";
    pub const EXITS: &str = "Exits";
}

pub mod safety {
    pub const MONTH: &str = "Month";
    pub const INCIDENTS: &str = "Incidents";
    pub const NEAR_MISSES: &str = "Near Misses";
    pub const DAYS_WITHOUT_ACCIDENTS: &str = "Days Without Accidents";
    pub const ACTIVE_ALERTS: &str = "Active Safety Alerts";
    pub const INCIDENT_ID: &str = "IncidentID";
}

pub mod engagement {
    pub const LABOR_CLIMATE_SCORE: &str = "Labor Climate Score";
    pub const ENPS: &str = "eNPS";
    pub const PARTICIPATION_RATE: &str = "Survey Participation Rate (%)";
    pub const RECOGNITIONS_COUNT: &str = "Recognitions Count";
    pub const PSYCH_SAFETY_SCORE: &str = "Psychological Safety Score";
    pub const PSYCH_SAFETY_DATE: &str = "Survey Date PS";

    // Radar dimensions, keyed by dimension id in the registry sub-map.
    pub const RADAR_INITIATIVE: &str = "Engagement - Initiative";
    pub const RADAR_AUTONOMY: &str = "Engagement - Autonomy";
    pub const RADAR_RECOGNITION: &str = "Engagement - Recognition";
    pub const RADAR_GROWTH: &str = "Engagement - Growth Opportunities";
    pub const RADAR_BELONGING: &str = "Engagement - Belonging";
}

pub mod stress {
    pub const STRESS_LEVEL_SURVEY: &str = "Stress Level (Survey 0-10)";
    pub const OVERTIME_HOURS: &str = "Overtime Hours";
    pub const UNFILLED_SHIFTS: &str = "Unfilled Shifts";
    pub const WORKLOAD_PERCEPTION: &str = "Workload Perception (0-10)";
    pub const PSYCHOLOGICAL_SIGNALS: &str = "Psychological Stress Signals (0-10)";
    pub const PERCEIVED_WORKLOAD: &str = "Perceived Workload Index (0-10)";
    pub const WORKLOAD_DATE: &str = "Workload Survey Date";
}

pub mod tasks {
    pub const COMPLIANCE_RATE: &str = "Task Compliance Rate (%)";
    pub const TASK_DATE: &str = "Task Date";
}

pub mod collaboration {
    pub const SCORE: &str = "Collaboration Score (0-100)";
    pub const ASSESSMENT_DATE: &str = "Collaboration Assessment Date";
    pub const COHESION_INDEX: &str = "Team Cohesion Index (0-100)";
    pub const COHESION_DATE: &str = "Cohesion Survey Date";
}

pub mod wellbeing {
    pub const INDEX: &str = "Well-Being Index (0-10)";
    pub const SURVEY_DATE: &str = "Wellbeing Survey Date";
}

pub mod downtime {
    pub const DURATION_MINUTES: &str = "Downtime (Minutes)";
    pub const CAUSE: &str = "Downtime Cause";
    pub const START_DATE: &str = "Downtime Start Date";
    pub const SHIFT: &str = "Shift Of Downtime";
}

pub mod oee {
    pub const AVAILABILITY: &str = "Availability (%)";
    pub const PERFORMANCE: &str = "Performance (%)";
    pub const QUALITY: &str = "Quality (%)";
    pub const OVERALL: &str = "OEE (%)";
    pub const CALCULATION_DATE: &str = "OEE Calculation Date";
}

pub mod resilience {
    pub const SCORE: &str = "Operational Resilience Score (0-100)";
    pub const ASSESSMENT_DATE: &str = "Resilience Assessment Date";
}

pub mod spatial {
    pub const X_COORD: &str = "X-Coordinate";
    pub const Y_COORD: &str = "Y-Coordinate";
    pub const Z_COORD: &str = "Z-Coordinate";
    pub const TIMESTAMP: &str = "Location Timestamp";
    pub const WORKER_ID: &str = "Worker ID";
    pub const ZONE: &str = "Zone";
    pub const STATUS: &str = "Status";
}
