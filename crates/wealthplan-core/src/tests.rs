use wealthplan_domain::{
    FamilyMember, HouseholdLedger, IncomeMode, LineItemKind, Month, NetWorthTrend,
};

use crate::{
    cashflow_service::CashflowService,
    category_service::CategoryService,
    net_worth_service::NetWorthAggregator,
    portfolio_service::PortfolioService,
    profile_service::ProfileService,
    projection_service::CashflowProjector,
    public_api::{api_add_asset, api_add_head, api_add_liability, api_dashboard, api_set_amount},
    CoreError,
};

#[test]
fn cashflow_service_builds_reference_household() {
    let mut ledger = HouseholdLedger::new();
    CashflowService::set_opening_balance(&mut ledger, 10_000.0).expect("opening balance");
    CashflowService::set_amount(&mut ledger, "1", 0, 50_000.0).expect("set salary");
    CashflowService::replicate(&mut ledger, "1").expect("replicate salary");
    let rent = CashflowService::add_head(&mut ledger, "Rent", LineItemKind::Expense);
    CashflowService::set_amount_from_input(&mut ledger, &rent, 0, "20,000").expect("set rent");
    CashflowService::replicate(&mut ledger, &rent).expect("replicate rent");

    let projection = CashflowProjector::project_ledger(&ledger);
    let january = projection.month(Month::JANUARY);
    assert_eq!(january.available, 60_000.0);
    assert_eq!(january.closing, 40_000.0);
    assert_eq!(projection.final_closing(), 370_000.0);
}

#[test]
fn adding_an_existing_head_returns_its_id() {
    let mut ledger = HouseholdLedger::new();
    let id = CashflowService::add_head(&mut ledger, "Salary", LineItemKind::Income);
    assert_eq!(id, "1");
    assert_eq!(ledger.cashflow.len(), 2);

    // Same name, other kind, is a distinct head.
    let expense = CashflowService::add_head(&mut ledger, "Salary", LineItemKind::Expense);
    assert_ne!(expense, "1");
    assert_eq!(ledger.cashflow.len(), 3);
}

#[test]
fn cashflow_service_reports_unknown_heads_and_months() {
    let mut ledger = HouseholdLedger::new();
    assert!(matches!(
        CashflowService::set_amount(&mut ledger, "missing", 0, 1.0),
        Err(CoreError::LineItemNotFound(_))
    ));
    assert!(matches!(
        CashflowService::set_amount(&mut ledger, "1", 12, 1.0),
        Err(CoreError::InvalidMonth(12))
    ));
    let removed = CashflowService::remove_head(&mut ledger, "2").expect("remove bonus");
    assert_eq!(removed.name, "Bonus");
    assert!(CashflowService::remove_head(&mut ledger, "2").is_err());
}

#[test]
fn non_finite_figures_are_rejected() {
    let mut ledger = HouseholdLedger::new();
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            api_set_amount(&mut ledger, "1", 0, bad),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            CashflowService::set_opening_balance(&mut ledger, bad),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            api_add_asset(&mut ledger, "Gold", "Commodity", bad, 0.0),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            api_add_liability(&mut ledger, "Card", 1_000.0, bad, 0.0),
            Err(CoreError::Validation(_))
        ));
    }
    assert_eq!(ledger, HouseholdLedger::new());

    let asset = PortfolioService::add_default_asset(&mut ledger);
    PortfolioService::update_asset(&mut ledger, &asset, |asset| asset.current_value = 500.0)
        .expect("finite value");
    let rejected = PortfolioService::update_asset(&mut ledger, &asset, |asset| {
        asset.current_value = 900.0;
        asset.appreciation_percent = f64::NAN;
    });
    assert!(matches!(rejected, Err(CoreError::Validation(_))));
    let stored = ledger.asset(&asset).expect("asset kept");
    assert_eq!((stored.current_value, stored.appreciation_percent), (500.0, 0.0));

    let loan = PortfolioService::add_default_liability(&mut ledger);
    assert!(matches!(
        PortfolioService::update_liability(&mut ledger, &loan, |loan| {
            loan.outstanding_principal = f64::INFINITY;
        }),
        Err(CoreError::Validation(_))
    ));
    assert_eq!(
        ledger.liability(&loan).map(|loan| loan.outstanding_principal),
        Some(0.0)
    );
}

#[test]
fn opening_balance_input_is_coerced() {
    let mut ledger = HouseholdLedger::new();
    let stored = CashflowService::set_opening_balance_from_input(&mut ledger, "₹1,25,000");
    assert_eq!(stored, 125_000.0);
    assert_eq!(ledger.initial_opening_balance, 125_000.0);
}

#[test]
fn portfolio_service_feeds_aggregator() {
    let mut ledger = HouseholdLedger::new();
    let asset = PortfolioService::add_default_asset(&mut ledger);
    PortfolioService::update_asset(&mut ledger, &asset, |asset| {
        asset.current_value = 100_000.0;
        asset.appreciation_percent = 10.0;
    })
    .expect("update asset");
    let loan = PortfolioService::add_default_liability(&mut ledger);
    PortfolioService::update_liability(&mut ledger, &loan, |loan| {
        loan.outstanding_principal = 120_000.0;
        loan.monthly_payment = 5_000.0;
        loan.principal_portion_percent = 50.0;
    })
    .expect("update liability");

    let snapshot = NetWorthAggregator::aggregate_ledger(&ledger);
    assert!((snapshot.projected_assets - 110_000.0).abs() < 1e-9);
    assert_eq!(snapshot.projected_liabilities, 90_000.0);
    assert_eq!(snapshot.debt_reduction_delta, 30_000.0);
    assert_eq!(snapshot.present_net_worth, -20_000.0);
    assert!((snapshot.projected_year_end_net_worth - 20_000.0).abs() < 1e-9);

    let percent = PortfolioService::set_appreciation_from_input(&mut ledger, &asset, "-2.5%")
        .expect("set appreciation");
    assert_eq!(percent, -2.5);
    let value = PortfolioService::set_value_from_input(&mut ledger, &asset, "₹2,00,000")
        .expect("set value");
    assert_eq!(value, 200_000.0);
    PortfolioService::set_principal_portion_from_input(&mut ledger, &loan, "abc")
        .expect("set portion");
    assert_eq!(
        ledger.liability(&loan).map(|loan| loan.principal_portion_percent),
        Some(0.0)
    );

    PortfolioService::remove_asset(&mut ledger, &asset).expect("remove asset");
    PortfolioService::remove_liability(&mut ledger, &loan).expect("remove liability");
    assert!(matches!(
        PortfolioService::remove_asset(&mut ledger, &asset),
        Err(CoreError::AssetNotFound(_))
    ));
    assert!(matches!(
        PortfolioService::update_liability(&mut ledger, &loan, |_| {}),
        Err(CoreError::LiabilityNotFound(_))
    ));
}

#[test]
fn profile_update_reconciles_only_on_mode_change() {
    let mut ledger = HouseholdLedger::new();

    let outcome = ProfileService::update(&mut ledger, |profile| profile.name = "Meera".into());
    assert!(outcome.is_none());

    let outcome = ProfileService::update(&mut ledger, |profile| {
        profile.income_mode = IncomeMode::Joint;
    })
    .expect("mode changed");
    assert_eq!(outcome.added, vec!["Spouse Salary", "Spouse Bonus"]);
    assert_eq!(ledger.profile.income_mode, IncomeMode::Joint);

    let spouse = ledger
        .find_line_item("Spouse Salary", LineItemKind::Income)
        .expect("spouse salary")
        .id
        .clone();
    CashflowService::set_amount(&mut ledger, &spouse, 3, 40_000.0).expect("set spouse salary");

    let outcome = ProfileService::toggle_income_mode(&mut ledger);
    assert_eq!(outcome.removed.len(), 2);
    assert_eq!(ledger.profile.income_mode, IncomeMode::Individual);
    assert!(ledger
        .find_line_item("Spouse Salary", LineItemKind::Income)
        .is_none());
}

#[test]
fn family_roster_crud() {
    let mut ledger = HouseholdLedger::new();
    let id = ProfileService::add_member(&mut ledger, FamilyMember::new("Kabir", 8, "Son"));
    ProfileService::update_member(&mut ledger, &id, |member| member.age = 9).expect("update");
    assert_eq!(ledger.profile.member(&id).map(|m| m.age), Some(9));

    let removed = ProfileService::remove_member(&mut ledger, &id).expect("remove");
    assert_eq!(removed.name, "Kabir");
    assert!(matches!(
        ProfileService::remove_member(&mut ledger, &id),
        Err(CoreError::FamilyMemberNotFound(_))
    ));
}

#[test]
fn category_labels_are_hints_only() {
    let mut ledger = HouseholdLedger::new();
    assert!(CategoryService::add(&mut ledger, LineItemKind::Expense, "  Pets ").expect("add"));
    assert!(!CategoryService::add(&mut ledger, LineItemKind::Expense, "Pets").expect("dup"));
    assert!(CategoryService::add(&mut ledger, LineItemKind::Expense, "   ").is_err());

    let pets = CashflowService::add_head(&mut ledger, "Pets", LineItemKind::Expense);
    assert!(!CategoryService::available_labels(&ledger, LineItemKind::Expense)
        .contains(&"Pets".to_string()));

    assert!(CategoryService::remove(&mut ledger, LineItemKind::Expense, "Pets"));
    assert!(ledger.line_item(&pets).is_some());
    assert!(!CategoryService::remove(&mut ledger, LineItemKind::Expense, "Pets"));

    let available = CategoryService::available_labels(&ledger, LineItemKind::Income);
    assert!(!available.contains(&"Salary".to_string()));
    assert!(available.contains(&"Dividends".to_string()));
}

#[test]
fn public_api_dashboard_summarizes_household() {
    let mut ledger = HouseholdLedger::new();
    ledger.initial_opening_balance = 10_000.0;
    let groceries = api_add_head(&mut ledger, "Groceries", LineItemKind::Expense);
    api_set_amount(&mut ledger, &groceries, 0, 25_000.0).expect("set groceries");
    api_add_asset(&mut ledger, "Gold", "Commodity", 50_000.0, -10.0).expect("add gold");
    api_add_liability(&mut ledger, "Card", 5_000.0, 0.0, 0.0).expect("add card");

    let dashboard = api_dashboard(&ledger);
    assert_eq!(dashboard.present_net_worth, 55_000.0);
    assert_eq!(dashboard.year_end_closing, -15_000.0);
    assert!((dashboard.projected_year_end_net_worth - 25_000.0).abs() < 1e-9);
    assert_eq!(dashboard.trend, NetWorthTrend::Depreciation);
    assert!((dashboard.change - 30_000.0).abs() < 1e-9);
    assert_eq!(dashboard.shortfall_months, 12);
    assert_eq!(dashboard.annual_savings_delta, -25_000.0);
}
