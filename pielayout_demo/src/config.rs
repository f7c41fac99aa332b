// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series configuration loading for the demo.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use peniko::color::palette::css;
use pielayout::{ArcLabel, LayoutParams, Length, PieSeries, StateOverride, ValueItem};

/// Parses a series from its JSON configuration.
pub(crate) fn parse_series(json: &str) -> Result<PieSeries> {
    let series: PieSeries = serde_json::from_str(json).context("invalid series configuration")?;
    series.validate()?;
    Ok(series)
}

/// Reads and parses a series configuration file.
pub(crate) fn load_series(path: &Path) -> Result<PieSeries> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_series(&json).with_context(|| format!("failed to load {}", path.display()))
}

/// Applies `NAME=VALUE` layout overrides, in order.
pub(crate) fn apply_settings(params: &mut LayoutParams, settings: &[String]) -> Result<()> {
    for setting in settings {
        let Some((name, value)) = setting.split_once('=') else {
            bail!("expected NAME=VALUE, got `{setting}`");
        };
        params.set(name.trim(), value)?;
    }
    Ok(())
}

/// A small donut used when no configuration is given.
pub(crate) fn sample_series() -> PieSeries {
    PieSeries::new("browsers")
        .with_data([
            ValueItem::new("chrome", 64.2).with_label("Chrome"),
            ValueItem::new("safari", 18.9).with_label("Safari"),
            ValueItem::new("edge", 5.3).with_label("Edge"),
            ValueItem::new("firefox", 3.1).with_label("Firefox"),
            ValueItem::new("other", 8.5).with_label("Other"),
        ])
        .with_params(
            LayoutParams::default()
                .with_inner_radius(Length::Percent(45.0))
                .with_outer_radius(Length::Percent(90.0))
                .with_padding_angle(1.5)
                .with_corner_radius(4.0)
                .with_arc_label(ArcLabel::FormattedValue, 20.0),
        )
        .with_highlighted(StateOverride::default().with_additional_radius(8.0))
        .with_faded(
            StateOverride::default()
                .with_additional_radius(-4.0)
                .with_color(css::SILVER),
        )
}

#[cfg(test)]
mod tests {
    use pielayout::{ItemId, Length, SortOrder};

    use super::*;

    #[test]
    fn parses_the_flat_series_shape() {
        let series = parse_series(
            r##"{
                "id": "fruit",
                "data": [
                    {"id": 0, "value": 10, "label": "apples", "color": "#ff0000"},
                    {"id": "pears", "value": 2.5, "formattedValue": "2.5 kg"}
                ],
                "innerRadius": "50%",
                "outerRadius": 90,
                "paddingAngle": 2,
                "sortingValues": "desc",
                "arcLabel": "formattedValue",
                "highlighted": {"additionalRadius": 5},
                "faded": {"color": "gray", "innerRadius": "10%"}
            }"##,
        )
        .unwrap();
        assert_eq!(series.id.0, "fruit");
        assert_eq!(series.data[0].id, ItemId::Num(0));
        assert_eq!(series.data[1].id, ItemId::from("pears"));
        assert_eq!(
            series.data[0].color.map(|c| c.to_rgba8()),
            Some(css::RED.to_rgba8())
        );
        assert_eq!(series.data[1].formatted_value.as_deref(), Some("2.5 kg"));
        assert_eq!(series.params.inner_radius, Length::Percent(50.0));
        assert_eq!(series.params.outer_radius, Length::Px(90.0));
        assert_eq!(series.params.padding_angle, 2.0);
        assert_eq!(series.params.sort_order, SortOrder::Descending);
        assert_eq!(series.params.arc_label, Some(ArcLabel::FormattedValue));
        assert_eq!(series.overrides.highlighted.additional_radius, Some(5.0));
        assert_eq!(
            series.overrides.faded.color.map(|c| c.to_rgba8()),
            Some(css::GRAY.to_rgba8())
        );
        assert_eq!(
            series.overrides.faded.inner_radius,
            Some(Length::Percent(10.0))
        );
        // Untouched settings keep their defaults.
        assert_eq!(series.params.end_angle, 360.0);
    }

    #[test]
    fn malformed_percentages_are_reported() {
        let err = parse_series(r#"{"id": "a", "data": [], "innerRadius": "50"}"#).unwrap_err();
        assert!(format!("{err:#}").contains("unknown length `50`"), "{err:#}");
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let err = parse_series(
            r#"{"id": "a", "data": [{"id": 1, "value": 1}, {"id": 1, "value": 2}]}"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("duplicate item id `1`"), "{err:#}");
    }

    #[test]
    fn settings_override_layout_params() {
        let mut params = LayoutParams::default();
        apply_settings(
            &mut params,
            &["innerRadius=40%".into(), "startAngle = -90".into()],
        )
        .unwrap();
        assert_eq!(params.inner_radius, Length::Percent(40.0));
        assert_eq!(params.start_angle, -90.0);
        assert!(apply_settings(&mut params, &["innerRadius".into()]).is_err());
        assert!(apply_settings(&mut params, &["bogus=1".into()]).is_err());
    }

    #[test]
    fn sample_series_is_valid() {
        assert!(sample_series().validate().is_ok());
    }
}
