use crate::models::{AlertFeature, ForecastPeriod};

/// Formats a single weather alert into a fixed-field text block.
pub fn format_alert(feature: &AlertFeature) -> String {
    let props = &feature.properties;
    format!(
        "\nEvent: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}\n",
        props.event.as_deref().unwrap_or("Unknown"),
        props.area_desc.as_deref().unwrap_or("Unknown"),
        props.severity.as_deref().unwrap_or("Unknown"),
        props.description.as_deref().unwrap_or("No description available"),
        props.instruction.as_deref().unwrap_or("No instructions provided"),
    )
}

/// Formats a single forecast period into a fixed-field text block.
pub fn format_period(period: &ForecastPeriod) -> String {
    let temperature = period
        .temperature
        .map_or_else(|| "N/A".to_string(), |t| t.to_string());
    format!(
        "\n{}:\nTemperature: {}\u{00b0}{}\nWind: {} {}\nForecast: {}\n",
        period.name.as_deref().unwrap_or("Unknown"),
        temperature,
        period.temperature_unit.as_deref().unwrap_or("F"),
        period.wind_speed.as_deref().unwrap_or("N/A"),
        period.wind_direction.as_deref().unwrap_or("N/A"),
        period.detailed_forecast.as_deref().unwrap_or("No details available"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertProperties;

    #[test]
    fn format_alert_substitutes_all_fields_in_order() {
        let feature = AlertFeature {
            properties: AlertProperties {
                event: Some("Flood Warning".to_string()),
                area_desc: Some("Sacramento County".to_string()),
                severity: Some("Severe".to_string()),
                description: Some("Heavy rain expected.".to_string()),
                instruction: Some("Move to higher ground.".to_string()),
            },
        };

        let text = format_alert(&feature);
        assert_eq!(
            text,
            "\nEvent: Flood Warning\nArea: Sacramento County\nSeverity: Severe\n\
             Description: Heavy rain expected.\nInstructions: Move to higher ground.\n"
        );
    }

    #[test]
    fn format_alert_uses_placeholders_for_missing_fields() {
        let feature = AlertFeature {
            properties: AlertProperties::default(),
        };

        let text = format_alert(&feature);
        assert!(text.contains("Event: Unknown\n"));
        assert!(text.contains("Area: Unknown\n"));
        assert!(text.contains("Severity: Unknown\n"));
        assert!(text.contains("Description: No description available\n"));
        assert!(text.contains("Instructions: No instructions provided\n"));
    }

    #[test]
    fn format_period_substitutes_all_fields() {
        let period = ForecastPeriod {
            name: Some("Tonight".to_string()),
            temperature: Some(61),
            temperature_unit: Some("F".to_string()),
            wind_speed: Some("5 to 10 mph".to_string()),
            wind_direction: Some("SW".to_string()),
            detailed_forecast: Some("Partly cloudy.".to_string()),
        };

        let text = format_period(&period);
        assert_eq!(
            text,
            "\nTonight:\nTemperature: 61\u{00b0}F\nWind: 5 to 10 mph SW\nForecast: Partly cloudy.\n"
        );
    }

    #[test]
    fn format_period_uses_placeholders_for_missing_fields() {
        let text = format_period(&ForecastPeriod::default());
        assert!(text.starts_with("\nUnknown:\n"));
        assert!(text.contains("Temperature: N/A\u{00b0}F\n"));
        assert!(text.contains("Wind: N/A N/A\n"));
        assert!(text.contains("Forecast: No details available\n"));
    }
}
