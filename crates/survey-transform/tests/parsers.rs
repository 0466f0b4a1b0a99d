//! Tests for the individual field parsers.

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use survey_model::Disease;
use survey_transform::TransformError;
use survey_transform::parsers::{
    parse_age_group_column, parse_college_term, parse_diagnosed_with_ler_column, parse_diseases,
    parse_hours_on_computer, parse_hours_on_computer_to_buckets, parse_reference_date_column,
};

fn test_df(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| {
            Series::new(
                name.into(),
                values.iter().copied().map(String::from).collect::<Vec<_>>(),
            )
            .into_column()
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

fn flags(df: &DataFrame, name: &str) -> Vec<i32> {
    df.column(name)
        .unwrap()
        .i32()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect()
}

fn texts(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(String::from))
        .collect()
}

fn names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

#[test]
fn ler_only_exact_sim_is_affirmative() {
    let df = test_df(vec![(
        "diagnosed_with_ler",
        vec!["Sim", "Não", "", "sim", " Sim"],
    )]);

    let df = parse_diagnosed_with_ler_column(df).unwrap();

    assert_eq!(flags(&df, "diagnosed_with_ler"), vec![1, 0, 0, 0, 0]);
}

#[test]
fn ler_null_reads_as_no() {
    let df = DataFrame::new(vec![
        Series::new("diagnosed_with_ler".into(), vec![None, Some("Sim")]).into_column(),
    ])
    .unwrap();

    let df = parse_diagnosed_with_ler_column(df).unwrap();

    assert_eq!(flags(&df, "diagnosed_with_ler"), vec![0, 1]);
}

#[test]
fn age_group_strips_unit_and_spaces() {
    let df = DataFrame::new(vec![
        Series::new(
            "age_group".into(),
            vec![Some("18 - 24 anos"), Some("25anos"), None],
        )
        .into_column(),
    ])
    .unwrap();

    let df = parse_age_group_column(df).unwrap();

    assert_eq!(
        texts(&df, "age_group"),
        vec![Some("18-24".to_string()), Some("25".to_string()), None]
    );
}

#[test]
fn hours_text_is_reduced_to_range_tokens() {
    let df = test_df(vec![(
        "hours_on_computer",
        vec!["<1h", "1-3h", "3 - 5h", "5-8h", ">8h", "Mais de 8 horas"],
    )]);

    let df = parse_hours_on_computer(df).unwrap();

    assert_eq!(
        texts(&df, "hours_on_computer"),
        vec![
            Some("<1".to_string()),
            Some("1-3".to_string()),
            Some("3-5".to_string()),
            Some("5-8".to_string()),
            Some(">8".to_string()),
            Some("Maisde8oras".to_string()),
        ]
    );
}

#[test]
fn hours_buckets_set_exactly_one_flag() {
    let df = test_df(vec![("hours_on_computer", vec!["3-5", "<1", "Maisde8oras"])]);

    let df = parse_hours_on_computer_to_buckets(df).unwrap();

    assert!(df.column("hours_on_computer").is_err());
    assert_eq!(flags(&df, "less_then_1hour"), vec![0, 1, 0]);
    assert_eq!(flags(&df, "between_1_and_3_hours"), vec![0, 0, 0]);
    assert_eq!(flags(&df, "between_3_and_5_hours"), vec![1, 0, 0]);
    assert_eq!(flags(&df, "between_5_and_8_hours"), vec![0, 0, 0]);
    assert_eq!(flags(&df, "more_then_8_hours"), vec![0, 0, 0]);
}

#[test]
fn reference_date_keeps_calendar_date() {
    let df = test_df(vec![(
        "reference_date",
        vec!["15/03/2023 14:30:00", "01/02/2023 09:05:59"],
    )]);

    let df = parse_reference_date_column(df).unwrap();

    let column = df.column("reference_date").unwrap();
    assert_eq!(column.dtype(), &DataType::Date);
    let rendered = column.cast(&DataType::String).unwrap();
    let rendered = rendered.str().unwrap();
    assert_eq!(rendered.get(0), Some("2023-03-15"));
    assert_eq!(rendered.get(1), Some("2023-02-01"));
}

#[test]
fn reference_date_rejects_other_layouts() {
    let df = test_df(vec![(
        "reference_date",
        vec!["15/03/2023 14:30:00", "2023-03-15"],
    )]);

    let err = parse_reference_date_column(df).unwrap_err();

    match err {
        TransformError::InvalidReferenceDate { row, value } => {
            assert_eq!(row, 1);
            assert_eq!(value, "2023-03-15");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reference_date_rejects_null() {
    let df = DataFrame::new(vec![
        Series::new("reference_date".into(), vec![None::<&str>]).into_column(),
    ])
    .unwrap();

    let err = parse_reference_date_column(df).unwrap_err();

    assert!(matches!(err, TransformError::MissingReferenceDate { row: 0 }));
}

#[test]
fn reference_date_rejects_loose_layouts() {
    for malformed in [
        "15/03/23 14:30:00",
        " 15/03/2023 14:30:00",
        "15/03/2023 14:30:00 ",
        "15/03/202314:30:00",
        "15/03/+2023 14:30:00",
        "15/03/2023 14:30:60",
        "15/03/2023  14:30:00",
    ] {
        let df = test_df(vec![("reference_date", vec![malformed])]);

        let err = parse_reference_date_column(df).unwrap_err();

        match err {
            TransformError::InvalidReferenceDate { row, value } => {
                assert_eq!(row, 0);
                assert_eq!(value, malformed);
            }
            other => panic!("unexpected error for {malformed:?}: {other}"),
        }
    }
}

#[test]
fn reference_date_accepts_unpadded_fields() {
    let df = test_df(vec![("reference_date", vec!["5/3/2023 9:05:07"])]);

    let df = parse_reference_date_column(df).unwrap();

    let rendered = df
        .column("reference_date")
        .unwrap()
        .cast(&DataType::String)
        .unwrap();
    assert_eq!(rendered.str().unwrap().get(0), Some("2023-03-05"));
}

#[test]
fn diseases_expand_into_flags() {
    let df = test_df(vec![
        ("age_group", vec!["18-24", "25-30", "31-40"]),
        (
            "diseases",
            vec![
                "Tendinite, Lombalgia (Desconfortos na lombar)",
                "Nenhuma",
                "Enxaqueca",
            ],
        ),
    ]);

    let df = parse_diseases(df).unwrap();

    assert_eq!(
        names(&df),
        vec![
            "age_group",
            "has_any_disease",
            "has_tendinitis",
            "has_muscle_aches",
            "has_carpal_tunnel_syndrome",
            "has_backache",
            "has_bursitis",
            "has_dry_eye_syndrome",
            "has_eyestrain",
        ]
    );
    assert_eq!(flags(&df, "has_any_disease"), vec![1, 0, 1]);
    assert_eq!(flags(&df, "has_tendinitis"), vec![1, 0, 0]);
    assert_eq!(flags(&df, "has_backache"), vec![1, 0, 0]);
    assert_eq!(flags(&df, "has_muscle_aches"), vec![0, 0, 0]);
    assert_eq!(flags(&df, "has_carpal_tunnel_syndrome"), vec![0, 0, 0]);
    assert_eq!(flags(&df, "has_bursitis"), vec![0, 0, 0]);
    assert_eq!(flags(&df, "has_dry_eye_syndrome"), vec![0, 0, 0]);
    assert_eq!(flags(&df, "has_eyestrain"), vec![0, 0, 0]);
}

#[test]
fn every_disease_label_sets_only_its_own_flag() {
    let labels: Vec<&str> = Disease::ALL.iter().map(|disease| disease.label()).collect();
    let df = test_df(vec![("diseases", labels)]);

    let df = parse_diseases(df).unwrap();

    assert_eq!(flags(&df, "has_any_disease"), vec![1; Disease::ALL.len()]);
    for disease in Disease::ALL {
        let expected: Vec<i32> = Disease::ALL
            .iter()
            .map(|row_disease| i32::from(*row_disease == disease))
            .collect();
        assert_eq!(flags(&df, disease.column()), expected, "{disease:?}");
    }
}

#[test]
fn skipped_disease_question_counts_as_any_disease() {
    let df = DataFrame::new(vec![
        Series::new("diseases".into(), vec![None::<&str>, Some("Nenhuma")]).into_column(),
    ])
    .unwrap();

    let df = parse_diseases(df).unwrap();

    assert_eq!(flags(&df, "has_any_disease"), vec![1, 0]);
    assert_eq!(flags(&df, "has_tendinitis"), vec![0, 0]);
}

#[test]
fn college_term_fans_out() {
    let df = test_df(vec![("college_term", vec!["7", "Já formado", ""])]);

    let df = parse_college_term(df).unwrap();

    assert_eq!(names(&df), vec!["college_term", "already_graduated"]);
    assert_eq!(
        texts(&df, "college_term"),
        vec![Some("7".to_string()), None, None]
    );
    assert_eq!(flags(&df, "already_graduated"), vec![0, 1, 1]);
}

#[test]
fn college_term_accepts_numeric_columns() {
    let df = DataFrame::new(vec![Column::new("college_term".into(), vec![3i64, 10])]).unwrap();

    let df = parse_college_term(df).unwrap();

    assert_eq!(
        texts(&df, "college_term"),
        vec![Some("3".to_string()), Some("10".to_string())]
    );
    assert_eq!(flags(&df, "already_graduated"), vec![0, 0]);
}

#[test]
fn parser_reports_missing_input_column() {
    let df = test_df(vec![("something_else", vec!["x"])]);

    let err = parse_diseases(df).unwrap_err();

    match err {
        TransformError::ColumnNotFound { column } => assert_eq!(column, "diseases"),
        other => panic!("unexpected error: {other}"),
    }
}
