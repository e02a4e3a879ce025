//! Unit tests covering `recommend` configuration and output.

use super::helpers::{CatalogWorkspace, parse_output, scored_ids};
use super::*;
use crate::recommend::{RecommendConfig, config_from_layers_for_test, run_recommend_with};
use bingoroute_core::{Preferences, Season};
use bingoroute_scorer::DEFAULT_MAX_RESULTS;
use chrono::NaiveDate;
use rstest::rstest;

fn winter_palace_args(workspace: &CatalogWorkspace) -> RecommendArgs {
    RecommendArgs {
        catalog: Some(workspace.catalog().to_path_buf()),
        themes: vec!["역사/문화".to_owned()],
        districts: vec!["종로구".to_owned()],
        start_date: Some("2026-01-10".to_owned()),
        end_date: Some("2026-01-12".to_owned()),
        max_results: None,
    }
}

#[rstest]
fn converting_recommend_without_catalog_errors() {
    let err = RecommendConfig::try_from(RecommendArgs::default()).expect_err("missing catalog");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_RECOMMEND_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn config_builds_preferences_and_defaults_the_limit() {
    let workspace = CatalogWorkspace::new();
    let config = RecommendConfig::try_from(winter_palace_args(&workspace)).expect("config");
    assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
    assert!(config.preferences.wants_theme("역사/문화"));
    assert!(config.preferences.wants_district("종로구"));
    assert_eq!(
        config.preferences.start_date(),
        NaiveDate::from_ymd_opt(2026, 1, 10)
    );
    assert_eq!(config.preferences.season(), Season::Winter);
}

#[rstest]
#[case::start(ARG_START_DATE, Some("2026-13-01"), None)]
#[case::end(ARG_END_DATE, None, Some("next tuesday"))]
fn malformed_dates_are_rejected(
    #[case] expected_field: &'static str,
    #[case] start: Option<&str>,
    #[case] end: Option<&str>,
) {
    let args = RecommendArgs {
        catalog: Some("catalog.json".into()),
        start_date: start.map(str::to_owned),
        end_date: end.map(str::to_owned),
        ..RecommendArgs::default()
    };
    let err = RecommendConfig::try_from(args).expect_err("date should be rejected");
    match err {
        CliError::InvalidDate { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected InvalidDate, found {other:?}"),
    }
}

#[rstest]
fn trips_ending_before_they_start_are_rejected() {
    let args = RecommendArgs {
        catalog: Some("catalog.json".into()),
        start_date: Some("2026-05-02".to_owned()),
        end_date: Some("2026-05-01".to_owned()),
        ..RecommendArgs::default()
    };
    let err = RecommendConfig::try_from(args).expect_err("reversed dates should be rejected");
    assert!(matches!(err, CliError::DateOrder { .. }));
}

#[rstest]
fn output_groups_the_ranking() {
    let workspace = CatalogWorkspace::new();
    let mut buffer = Vec::new();
    run_recommend_with(winter_palace_args(&workspace), &mut buffer).expect("recommend succeeds");
    let output = parse_output(&buffer);

    assert_eq!(
        scored_ids(&output["ranked"]),
        vec![
            "gyeongbokgung",
            "gwangjang-market",
            "national-museum",
            "n-seoul-tower"
        ]
    );
    assert_eq!(
        scored_ids(&output["topPicks"]),
        scored_ids(&output["ranked"])
    );
    assert_eq!(scored_ids(&output["themeMatches"]), vec!["gyeongbokgung"]);
    assert_eq!(
        scored_ids(&output["nearbyOptions"]),
        vec!["gyeongbokgung", "gwangjang-market"]
    );
    assert_eq!(output["ranked"][0]["score"], 93.4);
}

#[rstest]
fn max_results_truncates_the_ranking() {
    let workspace = CatalogWorkspace::new();
    let args = RecommendArgs {
        max_results: Some(1),
        ..winter_palace_args(&workspace)
    };
    let mut buffer = Vec::new();
    run_recommend_with(args, &mut buffer).expect("recommend succeeds");
    let output = parse_output(&buffer);
    assert_eq!(scored_ids(&output["ranked"]), vec!["gyeongbokgung"]);
    assert_eq!(scored_ids(&output["topPicks"]), vec!["gyeongbokgung"]);
}

#[rstest]
fn merge_layers_honour_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({ "catalog": "from-file.json", "max_results": 3, "start_date": "2026-07-01" }),
        None,
    );
    composer.push_environment(json!({ "max_results": 5 }));
    composer.push_cli(json!({ "catalog": "from-cli.json" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.catalog.as_str(), "from-cli.json");
    assert_eq!(config.max_results, 5);
    assert_eq!(
        config.preferences,
        Preferences::new().with_dates(NaiveDate::from_ymd_opt(2026, 7, 1), None)
    );
}
