use proptest::prelude::*;
use risk_chart::core::{
    MAX_CHART_ROWS, MAX_LABEL_CHARS, ScenarioResult, ScenarioResultSector, placeholder_rows,
    result_to_chart_rows,
};

fn sectors_strategy() -> impl Strategy<Value = Vec<ScenarioResultSector>> {
    prop::collection::vec(
        (
            "[A-Za-z ]{0,16}",
            -50.0f64..150.0,
            -100.0f64..100.0,
        ),
        0..20,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (name, score, delta))| {
                ScenarioResultSector::new(format!("{i:02}"), name, score, delta)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn row_count_is_min_of_eight_and_sector_count(sectors in sectors_strategy()) {
        let count = sectors.len();
        let current = ScenarioResult::new(sectors);
        let rows = result_to_chart_rows(Some(&current), None);

        if count == 0 {
            prop_assert_eq!(rows, placeholder_rows());
        } else {
            prop_assert_eq!(rows.len(), count.min(MAX_CHART_ROWS));
        }
    }

    #[test]
    fn rows_preserve_order_and_shocked_scores(sectors in sectors_strategy()) {
        prop_assume!(!sectors.is_empty());
        let current = ScenarioResult::new(sectors.clone());
        let rows = result_to_chart_rows(Some(&current), None);

        for (row, sector) in rows.iter().zip(&sectors) {
            prop_assert_eq!(row.shocked, sector.risk_score);
            let expected_name: String = sector.sector_name.chars().take(MAX_LABEL_CHARS).collect();
            prop_assert_eq!(&row.name, &expected_name);
            prop_assert!(row.name.chars().count() <= MAX_LABEL_CHARS);
        }
    }

    #[test]
    fn estimated_baselines_are_never_negative(sectors in sectors_strategy()) {
        prop_assume!(!sectors.is_empty());
        let current = ScenarioResult::new(sectors.clone());
        let rows = result_to_chart_rows(Some(&current), None);

        for (row, sector) in rows.iter().zip(&sectors) {
            prop_assert!(row.baseline >= 0.0);
            prop_assert_eq!(row.baseline, (sector.risk_score - sector.risk_delta).max(0.0));
        }
    }

    #[test]
    fn baseline_lookup_applies_only_to_matching_ids(
        sectors in sectors_strategy(),
        keep_mask in prop::collection::vec(any::<bool>(), 20),
        baseline_score in 0.0f64..100.0
    ) {
        prop_assume!(!sectors.is_empty());
        let baseline_sectors: Vec<_> = sectors
            .iter()
            .zip(&keep_mask)
            .filter(|(_, keep)| **keep)
            .map(|(sector, _)| {
                ScenarioResultSector::new(sector.sector_id.clone(), "b", baseline_score, 0.0)
            })
            .collect();
        let current = ScenarioResult::new(sectors.clone());
        let baseline = ScenarioResult::new(baseline_sectors);
        let rows = result_to_chart_rows(Some(&current), Some(&baseline));

        for ((row, sector), keep) in rows.iter().zip(&sectors).zip(&keep_mask) {
            if *keep {
                prop_assert_eq!(row.baseline, baseline_score);
            } else {
                prop_assert_eq!(row.baseline, (sector.risk_score - sector.risk_delta).max(0.0));
            }
        }
    }
}
