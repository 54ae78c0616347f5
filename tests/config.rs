use workout_stats::config::Config;

#[test]
fn default_log_filter_targets_crate() {
    assert_eq!(Config::default().log_filter, "workout_stats=info");
}
