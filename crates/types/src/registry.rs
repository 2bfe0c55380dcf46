//! Registry of variables exposed by the simulation webserver
//!
//! The upstream endpoint answers any string, so this list is advisory: it
//! drives selection menus and labeling in the app, not the fetch
//! contract. Names track the simulator's published variable set.

use serde::{Deserialize, Serialize};

/// Functional grouping of a variable, mirroring the dashboard sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableGroup {
    Core,
    Time,
    Coolant,
    Pumps,
    Rods,
    Generators,
    Turbines,
}

impl VariableGroup {
    pub fn label(&self) -> &'static str {
        match self {
            VariableGroup::Core => "Reactor Core",
            VariableGroup::Time => "Time",
            VariableGroup::Coolant => "Primary Coolant",
            VariableGroup::Pumps => "Circulation Pumps",
            VariableGroup::Rods => "Control Rods",
            VariableGroup::Generators => "Generators",
            VariableGroup::Turbines => "Steam Turbines",
        }
    }
}

/// Metadata describing a single upstream variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableMeta {
    /// Exact name the webserver expects in the `Variable` query parameter
    pub name: &'static str,
    /// Human-readable label for display
    pub label: &'static str,
    /// Unit of measurement, when one applies
    pub unit: Option<&'static str>,
    pub group: VariableGroup,
}

const fn var(
    name: &'static str,
    label: &'static str,
    unit: Option<&'static str>,
    group: VariableGroup,
) -> VariableMeta {
    VariableMeta {
        name,
        label,
        unit,
        group,
    }
}

/// All known upstream variables.
pub const VARIABLES: &[VariableMeta] = &[
    // Core
    var("CORE_TEMP", "Core Temperature", Some("°C"), VariableGroup::Core),
    var("CORE_TEMP_OPERATIVE", "Core Temp (Operative)", Some("°C"), VariableGroup::Core),
    var("CORE_TEMP_MAX", "Core Temp (Max)", Some("°C"), VariableGroup::Core),
    var("CORE_TEMP_MIN", "Core Temp (Min)", Some("°C"), VariableGroup::Core),
    var("CORE_TEMP_RESIDUAL", "Core Temp (Residual)", Some("°C"), VariableGroup::Core),
    var("CORE_PRESSURE", "Core Pressure", Some("bar"), VariableGroup::Core),
    var("CORE_PRESSURE_MAX", "Core Pressure (Max)", Some("bar"), VariableGroup::Core),
    var("CORE_PRESSURE_OPERATIVE", "Core Pressure (Operative)", Some("bar"), VariableGroup::Core),
    var("CORE_INTEGRITY", "Core Integrity", Some("%"), VariableGroup::Core),
    var("CORE_WEAR", "Core Wear", Some("%"), VariableGroup::Core),
    var("CORE_STATE", "Core State Code", None, VariableGroup::Core),
    var("CORE_STATE_CRITICALITY", "Core State Criticality", None, VariableGroup::Core),
    var("CORE_CRITICAL_MASS_REACHED", "Critical Mass Reached", None, VariableGroup::Core),
    var("CORE_CRITICAL_MASS_REACHED_COUNTER", "Critical Mass Counter", None, VariableGroup::Core),
    var("CORE_IMMINENT_FUSION", "Imminent Fusion", None, VariableGroup::Core),
    var("CORE_READY_FOR_START", "Ready For Start", None, VariableGroup::Core),
    var("CORE_STEAM_PRESENT", "Steam Present", None, VariableGroup::Core),
    var("CORE_HIGH_STEAM_PRESENT", "High Steam Present", None, VariableGroup::Core),
    // Time
    var("TIME", "Simulation Time", None, VariableGroup::Time),
    var("TIME_STAMP", "Timestamp", None, VariableGroup::Time),
    // Primary coolant
    var("COOLANT_CORE_STATE", "Coolant State Code", None, VariableGroup::Coolant),
    var("COOLANT_CORE_PRESSURE", "Coolant Pressure", Some("bar"), VariableGroup::Coolant),
    var("COOLANT_CORE_MAX_PRESSURE", "Coolant Pressure (Max)", Some("bar"), VariableGroup::Coolant),
    var("COOLANT_CORE_VESSEL_TEMPERATURE", "Vessel Temperature", Some("°C"), VariableGroup::Coolant),
    var("COOLANT_CORE_QUANTITY_IN_VESSEL", "Quantity In Vessel", None, VariableGroup::Coolant),
    var("COOLANT_CORE_PRIMARY_LOOP_LEVEL", "Primary Loop Level", None, VariableGroup::Coolant),
    var("COOLANT_CORE_FLOW_SPEED", "Flow Speed (Actual)", None, VariableGroup::Coolant),
    var("COOLANT_CORE_FLOW_ORDERED_SPEED", "Flow Speed (Ordered)", None, VariableGroup::Coolant),
    var("COOLANT_CORE_FLOW_REACHED_SPEED", "Flow Speed Reached", None, VariableGroup::Coolant),
    var("COOLANT_CORE_QUANTITY_CIRCULATION_PUMPS_PRESENT", "Circulation Pumps Present", None, VariableGroup::Coolant),
    var("COOLANT_CORE_QUANTITY_FREIGHT_PUMPS_PRESENT", "Freight Pumps Present", None, VariableGroup::Coolant),
    // Circulation pumps 0-2
    var("COOLANT_CORE_CIRCULATION_PUMP_0_STATUS", "Pump 0 Status", None, VariableGroup::Pumps),
    var("COOLANT_CORE_CIRCULATION_PUMP_1_STATUS", "Pump 1 Status", None, VariableGroup::Pumps),
    var("COOLANT_CORE_CIRCULATION_PUMP_2_STATUS", "Pump 2 Status", None, VariableGroup::Pumps),
    var("COOLANT_CORE_CIRCULATION_PUMP_0_DRY_STATUS", "Pump 0 Dry Status", None, VariableGroup::Pumps),
    var("COOLANT_CORE_CIRCULATION_PUMP_1_DRY_STATUS", "Pump 1 Dry Status", None, VariableGroup::Pumps),
    var("COOLANT_CORE_CIRCULATION_PUMP_2_DRY_STATUS", "Pump 2 Dry Status", None, VariableGroup::Pumps),
    var("COOLANT_CORE_CIRCULATION_PUMP_0_OVERLOAD_STATUS", "Pump 0 Overload", None, VariableGroup::Pumps),
    var("COOLANT_CORE_CIRCULATION_PUMP_1_OVERLOAD_STATUS", "Pump 1 Overload", None, VariableGroup::Pumps),
    var("COOLANT_CORE_CIRCULATION_PUMP_2_OVERLOAD_STATUS", "Pump 2 Overload", None, VariableGroup::Pumps),
    var("COOLANT_CORE_CIRCULATION_PUMP_0_ORDERED_SPEED", "Pump 0 Speed (Ordered)", None, VariableGroup::Pumps),
    var("COOLANT_CORE_CIRCULATION_PUMP_1_ORDERED_SPEED", "Pump 1 Speed (Ordered)", None, VariableGroup::Pumps),
    var("COOLANT_CORE_CIRCULATION_PUMP_2_ORDERED_SPEED", "Pump 2 Speed (Ordered)", None, VariableGroup::Pumps),
    var("COOLANT_CORE_CIRCULATION_PUMP_0_SPEED", "Pump 0 Speed (Actual)", None, VariableGroup::Pumps),
    var("COOLANT_CORE_CIRCULATION_PUMP_1_SPEED", "Pump 1 Speed (Actual)", None, VariableGroup::Pumps),
    var("COOLANT_CORE_CIRCULATION_PUMP_2_SPEED", "Pump 2 Speed (Actual)", None, VariableGroup::Pumps),
    // Control rods
    var("RODS_STATUS", "Rods Status Code", None, VariableGroup::Rods),
    var("RODS_MOVEMENT_SPEED", "Rods Movement Speed", None, VariableGroup::Rods),
    var("RODS_MOVEMENT_SPEED_DECREASED_HIGH_TEMPERATURE", "Rods Speed Decreased (High Temp)", None, VariableGroup::Rods),
    var("RODS_DEFORMED", "Rods Deformed", None, VariableGroup::Rods),
    var("RODS_TEMPERATURE", "Rods Temperature", Some("°C"), VariableGroup::Rods),
    var("RODS_MAX_TEMPERATURE", "Rods Temp (Max)", Some("°C"), VariableGroup::Rods),
    var("RODS_POS_ORDERED", "Rods Position (Ordered)", None, VariableGroup::Rods),
    var("RODS_POS_ACTUAL", "Rods Position (Actual)", None, VariableGroup::Rods),
    var("RODS_POS_REACHED", "Rods Position Reached", None, VariableGroup::Rods),
    var("RODS_QUANTITY", "Rods Quantity", None, VariableGroup::Rods),
    var("RODS_ALIGNED", "Rods Aligned", None, VariableGroup::Rods),
    // Generators 0-2
    var("GENERATOR_0_KW", "Gen 0 Output", Some("kW"), VariableGroup::Generators),
    var("GENERATOR_1_KW", "Gen 1 Output", Some("kW"), VariableGroup::Generators),
    var("GENERATOR_2_KW", "Gen 2 Output", Some("kW"), VariableGroup::Generators),
    var("GENERATOR_0_V", "Gen 0 Voltage", Some("V"), VariableGroup::Generators),
    var("GENERATOR_1_V", "Gen 1 Voltage", Some("V"), VariableGroup::Generators),
    var("GENERATOR_2_V", "Gen 2 Voltage", Some("V"), VariableGroup::Generators),
    var("GENERATOR_0_A", "Gen 0 Current", Some("A"), VariableGroup::Generators),
    var("GENERATOR_1_A", "Gen 1 Current", Some("A"), VariableGroup::Generators),
    var("GENERATOR_2_A", "Gen 2 Current", Some("A"), VariableGroup::Generators),
    var("GENERATOR_0_HERTZ", "Gen 0 Frequency", Some("Hz"), VariableGroup::Generators),
    var("GENERATOR_1_HERTZ", "Gen 1 Frequency", Some("Hz"), VariableGroup::Generators),
    var("GENERATOR_2_HERTZ", "Gen 2 Frequency", Some("Hz"), VariableGroup::Generators),
    var("GENERATOR_0_BREAKER", "Gen 0 Breaker", None, VariableGroup::Generators),
    var("GENERATOR_1_BREAKER", "Gen 1 Breaker", None, VariableGroup::Generators),
    var("GENERATOR_2_BREAKER", "Gen 2 Breaker", None, VariableGroup::Generators),
    // Steam turbines 0-2
    var("STEAM_TURBINE_0_RPM", "Turbine 0 RPM", Some("rpm"), VariableGroup::Turbines),
    var("STEAM_TURBINE_1_RPM", "Turbine 1 RPM", Some("rpm"), VariableGroup::Turbines),
    var("STEAM_TURBINE_2_RPM", "Turbine 2 RPM", Some("rpm"), VariableGroup::Turbines),
    var("STEAM_TURBINE_0_TEMPERATURE", "Turbine 0 Temperature", Some("°C"), VariableGroup::Turbines),
    var("STEAM_TURBINE_1_TEMPERATURE", "Turbine 1 Temperature", Some("°C"), VariableGroup::Turbines),
    var("STEAM_TURBINE_2_TEMPERATURE", "Turbine 2 Temperature", Some("°C"), VariableGroup::Turbines),
    var("STEAM_TURBINE_0_PRESSURE", "Turbine 0 Pressure", Some("bar"), VariableGroup::Turbines),
    var("STEAM_TURBINE_1_PRESSURE", "Turbine 1 Pressure", Some("bar"), VariableGroup::Turbines),
    var("STEAM_TURBINE_2_PRESSURE", "Turbine 2 Pressure", Some("bar"), VariableGroup::Turbines),
];

/// Look up a variable by its exact upstream name.
pub fn find_variable(name: &str) -> Option<&'static VariableMeta> {
    VARIABLES.iter().find(|v| v.name == name)
}

/// All registered variable names, in registry order.
pub fn all_names() -> impl Iterator<Item = &'static str> {
    VARIABLES.iter().map(|v| v.name)
}

/// Variables belonging to one dashboard group, in registry order.
pub fn variables_in_group(group: VariableGroup) -> impl Iterator<Item = &'static VariableMeta> {
    VARIABLES.iter().filter(move |v| v.group == group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = all_names().collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn test_find_variable() {
        let meta = find_variable("CORE_TEMP").expect("CORE_TEMP registered");
        assert_eq!(meta.label, "Core Temperature");
        assert_eq!(meta.unit, Some("°C"));
        assert_eq!(meta.group, VariableGroup::Core);

        assert!(find_variable("NOT_A_VARIABLE").is_none());
    }

    #[test]
    fn test_group_filter() {
        assert_eq!(variables_in_group(VariableGroup::Turbines).count(), 9);
        assert!(variables_in_group(VariableGroup::Pumps)
            .all(|v| v.name.starts_with("COOLANT_CORE_CIRCULATION_PUMP_")));
    }
}
