use googletest::prelude::*;

use super::*;
use crate::schema::Column;

const HEADER: &str = "2019 Championship Tour\nEvent 1 - Results\nPos  PIC  Class  No  Driver  Vehicle  Tire  Time  Factor  Corr  Diff  CDiff  Pts\n";

fn data_line(rank: usize, driver: &str) -> String {
    format!("{rank}  {rank}  SM  {rank}7  {driver} 1999 Mazda Miata  Hoosier  1:0{rank}.000  1.000  1:0{rank}.000  -  -  100")
}

/// A line that splits into one field too few.
const SHORT_LINE: &str = "9  9  SM  97  Ned Short 1999 Mazda Miata  Hoosier  1:09.000  1.000  -  -  100";

fn drivers(assembled: &Assembled) -> Vec<&str> {
    assembled
        .table
        .iter()
        .map(|record| record.get(Column::Driver))
        .collect()
}

#[gtest]
#[test_log::test]
fn test_first_page_header_is_skipped() -> googletest::Result<()> {
    // GIVEN: a first page with the three header lines and two data lines.
    let page = format!(
        "{HEADER}{}\n{}\n",
        data_line(1, "Ann Able"),
        data_line(2, "Bob Baker"),
    );

    // WHEN: the page is assembled.
    let assembled = Assembler::default().assemble([page])?;

    // THEN: only the data lines become records, in order.
    expect_eq!(drivers(&assembled), vec!["Ann Able", "Bob Baker"]);
    expect_eq!(assembled.considered, 2);
    expect_true!(assembled.rejected.is_empty());
    Ok(())
}

#[gtest]
#[test_log::test]
fn test_later_pages_keep_first_lines() -> googletest::Result<()> {
    // GIVEN: a second page that starts straight away with data lines.
    let pages = vec![
        format!("{HEADER}{}\n", data_line(1, "Ann Able")),
        format!(
            "{}\n{}\n{}\n{}\n",
            data_line(2, "Bob Baker"),
            data_line(3, "Cat Cole"),
            data_line(4, "Dan Dale"),
            data_line(5, "Eve East"),
        ),
    ];

    // WHEN: the pages are assembled.
    let assembled = Assembler::default().assemble(&pages)?;

    // THEN: records follow page order then line order.
    expect_eq!(
        drivers(&assembled),
        vec!["Ann Able", "Bob Baker", "Cat Cole", "Dan Dale", "Eve East"]
    );
    Ok(())
}

#[gtest]
#[test_log::test]
fn test_empty_lines_are_dropped_before_header_skip() -> googletest::Result<()> {
    let page = format!(
        "\n2019 Championship Tour\n\nEvent 1 - Results\n\n\nPos  Driver\n\n{}\n\n",
        data_line(1, "Ann Able"),
    );

    let assembled = Assembler::default().assemble([page])?;

    expect_eq!(drivers(&assembled), vec!["Ann Able"]);
    expect_eq!(assembled.considered, 1);
    Ok(())
}

#[gtest]
#[test_log::test]
fn test_short_line_is_rejected() -> googletest::Result<()> {
    // GIVEN: a data line that only splits into 12 fields between two good ones.
    let page = format!(
        "{HEADER}{}\n{SHORT_LINE}\n{}\n",
        data_line(1, "Ann Able"),
        data_line(2, "Bob Baker"),
    );

    // WHEN: the page is assembled.
    let assembled = Assembler::default().assemble([page])?;

    // THEN: the line is dropped and reported, the others are unaffected.
    expect_eq!(drivers(&assembled), vec!["Ann Able", "Bob Baker"]);
    expect_eq!(assembled.considered, 3);
    expect_eq!(
        assembled.rejected,
        vec![RejectedLine {
            page: 1,
            line: SHORT_LINE.to_string(),
            fields: vec![
                "9", "9", "SM", "97", "Ned Short", "1999 Mazda Miata", "Hoosier", "1:09.000",
                "1.000", "-", "-", "100",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }]
    );
    Ok(())
}

#[gtest]
fn test_short_first_page() -> googletest::Result<()> {
    let assembled = Assembler::default().assemble(["Title\nSubtitle"])?;

    expect_eq!(assembled, Assembled::default());
    Ok(())
}

#[gtest]
fn test_no_pages() -> googletest::Result<()> {
    let assembled = Assembler::default().assemble(Vec::<String>::new())?;

    expect_eq!(assembled, Assembled::default());
    Ok(())
}

#[gtest]
fn test_max_ratio_exceeded() {
    let page = format!("{HEADER}{}\n{SHORT_LINE}\n", data_line(1, "Ann Able"));
    let assembler = Assembler::new(LineNormalizer::default(), RejectPolicy::MaxRatio(0.25));

    expect_that!(
        assembler.assemble([page]),
        err(eq(&RejectionThresholdExceeded {
            rejected: 1,
            considered: 2,
            max_ratio: 0.25,
        }))
    );
}

#[gtest]
fn test_max_ratio_at_limit_is_allowed() -> googletest::Result<()> {
    let page = format!("{HEADER}{}\n{SHORT_LINE}\n", data_line(1, "Ann Able"));
    let assembler = Assembler::new(LineNormalizer::default(), RejectPolicy::MaxRatio(0.5));

    let assembled = assembler.assemble([page])?;

    expect_eq!(assembled.table.len(), 1);
    expect_eq!(assembled.rejected.len(), 1);
    Ok(())
}

#[gtest]
fn test_reject_policy_from_max_ratio() {
    expect_eq!(RejectPolicy::from_max_ratio(None), RejectPolicy::Lenient);
    expect_eq!(
        RejectPolicy::from_max_ratio(Some(0.1)),
        RejectPolicy::MaxRatio(0.1)
    );
}
