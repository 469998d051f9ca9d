use super::*;
use tickerpulse_dashboard::Interaction;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["tickerpulse"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_dates_command() {
    let cli = Cli::try_parse_from(["tickerpulse", "dates"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Dates)));
}

#[test]
fn parses_tickers_command() {
    let cli = Cli::try_parse_from(["tickerpulse", "tickers"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Tickers)));
}

#[test]
fn view_defaults_to_full_selection_with_prices() {
    let cli = Cli::try_parse_from(["tickerpulse", "view"]).unwrap();
    let Some(Commands::View(args)) = cli.command else {
        panic!("expected view command");
    };
    assert_eq!(args.from, None);
    assert_eq!(args.to, None);
    assert!(args.tickers.is_empty());
    assert!(!args.no_prices);
}

#[test]
fn view_accepts_repeated_tickers_and_range() {
    let cli = Cli::try_parse_from([
        "tickerpulse",
        "view",
        "--from",
        "2",
        "--to",
        "5",
        "--ticker",
        "GME",
        "--ticker",
        "AMC",
        "--pin",
        "GME",
        "--no-prices",
    ])
    .unwrap();
    let Some(Commands::View(args)) = cli.command else {
        panic!("expected view command");
    };
    assert_eq!(args.from, Some(2));
    assert_eq!(args.to, Some(5));
    assert_eq!(args.tickers, vec!["GME", "AMC"]);
    assert_eq!(args.pin.as_deref(), Some("GME"));
    assert!(args.no_prices);
}

#[test]
fn view_rejects_both_quick_filters() {
    let result = Cli::try_parse_from([
        "tickerpulse",
        "view",
        "--top-mentions",
        "3",
        "--top-sentiment",
        "3",
    ]);
    assert!(result.is_err());
}

#[test]
fn view_rejects_quick_filter_with_explicit_tickers() {
    let result = Cli::try_parse_from([
        "tickerpulse",
        "view",
        "--ticker",
        "GME",
        "--top-mentions",
        "3",
    ]);
    assert!(result.is_err());
}

#[test]
fn prices_requires_a_ticker() {
    assert!(Cli::try_parse_from(["tickerpulse", "prices"]).is_err());

    let cli = Cli::try_parse_from(["tickerpulse", "prices", "--ticker", "IBM"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Prices { ref tickers }) if tickers == &["IBM"]
    ));
}

#[test]
fn interactions_follow_flag_order() {
    let args = ViewArgs {
        to: Some(3),
        tickers: vec!["GME".to_string()],
        pin: Some("GME".to_string()),
        ..ViewArgs::default()
    };
    assert_eq!(
        dashboard::interactions(&args, Some(9)),
        vec![
            Interaction::SetDateRange(0, 3),
            Interaction::SetTickers(vec!["GME".to_string()]),
            Interaction::TogglePin("GME".to_string()),
        ]
    );
}

#[test]
fn open_ended_range_extends_to_last_date() {
    let args = ViewArgs {
        from: Some(4),
        top_sentiment: Some(2),
        ..ViewArgs::default()
    };
    assert_eq!(
        dashboard::interactions(&args, Some(9)),
        vec![Interaction::SetDateRange(4, 9), Interaction::TopSentiment(2)]
    );
}

#[test]
fn no_flags_means_no_interactions() {
    assert!(dashboard::interactions(&ViewArgs::default(), Some(9)).is_empty());
}
