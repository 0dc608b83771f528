use spendlens_core::{Category, analyze};
use spendlens_ingest::{Page, TextFragment, assemble_lines, parse_dbs_statement};

fn frag(text: &str, x: f64, y: f64) -> TextFragment {
    TextFragment::new(text, x, y)
}

/// A two-page statement as positioned fragments, the way a PDF text
/// extractor hands them over: out of reading order, with jittered
/// baselines inside each visual row.
fn sample_pages() -> Vec<Page> {
    let page_one = Page::new(vec![
        // header row
        frag("Transaction Details as of 31 Mar 2024", 40.0, 780.0),
        // brought forward row, amount fragment first
        frag("1,000.00", 420.0, 740.0),
        frag("Balance Brought Forward", 40.0, 741.5),
        // first transaction row
        frag("01/03/2024", 40.0, 700.0),
        frag("DEBIT CARD PURCHASE", 130.0, 702.0),
        frag("12.50", 330.0, 698.5),
        frag("987.50", 420.0, 700.0),
        // its continuation row
        frag("NTUC FP-BUONA VISTA SINGAPORE SG", 130.0, 680.0),
        // second transaction row
        frag("02/03/2024", 40.0, 640.0),
        frag("PAYNOW FROM: JOHN TAN PAYNOW MOBILE", 130.0, 640.0),
        frag("300.00", 330.0, 641.0),
        frag("1,287.50", 420.0, 639.0),
        // footer rows
        frag("Balance Carried Forward 1,287.50", 40.0, 120.0),
        frag("Page 1 of 2", 280.0, 60.0),
    ]);

    let page_two = Page::new(vec![
        frag("Balance Brought Forward", 40.0, 740.0),
        frag("1,287.50", 420.0, 740.0),
        frag("05/03/2024", 40.0, 700.0),
        frag("BUS/MRT 480239122 SINGAPORE SG", 130.0, 700.0),
        frag("1.68", 330.0, 700.0),
        frag("1,285.82", 420.0, 700.0),
        frag("Page 2 of 2", 280.0, 60.0),
    ]);

    vec![page_one, page_two]
}

#[test]
fn test_pages_to_transactions() {
    let lines = assemble_lines(&sample_pages());
    let txns = parse_dbs_statement(&lines).unwrap();

    assert_eq!(txns.len(), 3);

    assert_eq!(txns[0].date, "01/03/2024");
    assert_eq!(
        txns[0].description,
        "DEBIT CARD PURCHASE NTUC FP-BUONA VISTA SINGAPORE SG"
    );
    assert_eq!(txns[0].withdrawal, 12.50);
    assert_eq!(txns[0].category, Category::Groceries);

    assert_eq!(txns[1].deposit, 300.00);
    assert_eq!(txns[1].category, Category::Transfers);
    assert_eq!(txns[1].sender.as_deref(), Some("JOHN TAN"));

    assert_eq!(txns[2].date, "05/03/2024");
    assert_eq!(txns[2].withdrawal, 1.68);
    assert_eq!(txns[2].category, Category::PublicTransport);
    assert_eq!(txns[2].balance, 1285.82);
}

#[test]
fn test_balance_chain_holds_across_pages() {
    let lines = assemble_lines(&sample_pages());
    let txns = parse_dbs_statement(&lines).unwrap();

    let mut prev = 1000.00;
    for t in &txns {
        assert!(t.withdrawal >= 0.0 && t.deposit >= 0.0);
        assert!(t.withdrawal == 0.0 || t.deposit == 0.0);
        let expected = ((prev - t.withdrawal + t.deposit) * 100.0).round() / 100.0;
        assert_eq!(t.balance, expected, "chain broke at {}", t.date);
        prev = t.balance;
    }
}

#[test]
fn test_pipeline_is_deterministic() {
    let pages = sample_pages();
    let first = parse_dbs_statement(&assemble_lines(&pages)).unwrap();
    let second = parse_dbs_statement(&assemble_lines(&pages)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_monthly_summary_from_parsed_statement() {
    let lines = assemble_lines(&sample_pages());
    let txns = parse_dbs_statement(&lines).unwrap();
    let summaries = analyze(&txns);

    assert_eq!(summaries.len(), 1);
    let march = &summaries[0];
    assert_eq!(march.month, "2024-03");
    assert_eq!(march.transactions.len(), 3);
    assert_eq!(march.total_income, 300.00);
    assert!((march.total_expenditure - 14.18).abs() < 1e-9);
    assert_eq!(
        march.category_breakdown.get(&Category::Groceries),
        Some(&12.50)
    );
    assert_eq!(
        march.category_breakdown.get(&Category::PublicTransport),
        Some(&1.68)
    );
}

#[test]
fn test_empty_pages_parse_to_nothing() {
    let lines = assemble_lines(&[Page::default()]);
    assert!(lines.is_empty());
    assert!(parse_dbs_statement(&lines).unwrap().is_empty());
}
