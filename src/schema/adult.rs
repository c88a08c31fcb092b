//! Built-in rules for the UCI adult census-income dataset.

use super::{ColumnRule, TableChecks, TableSchema};

const WORKCLASS: &[&str] = &[
    "Private",
    "Self-emp-not-inc",
    "Self-emp-inc",
    "Federal-gov",
    "Local-gov",
    "State-gov",
    "Without-pay",
    "Never-worked",
];

const EDUCATION: &[&str] = &[
    "Bachelors",
    "Some-college",
    "11th",
    "HS-grad",
    "Prof-school",
    "Assoc-acdm",
    "Assoc-voc",
    "9th",
    "7th-8th",
    "12th",
    "Masters",
    "1st-4th",
    "10th",
    "Doctorate",
    "5th-6th",
    "Preschool",
];

const MARITAL_STATUS: &[&str] = &[
    "Married-civ-spouse",
    "Divorced",
    "Never-married",
    "Separated",
    "Widowed",
    "Married-spouse-absent",
    "Married-AF-spouse",
];

const OCCUPATION: &[&str] = &[
    "Tech-support",
    "Craft-repair",
    "Other-service",
    "Sales",
    "Exec-managerial",
    "Prof-specialty",
    "Handlers-cleaners",
    "Machine-op-inspct",
    "Adm-clerical",
    "Farming-fishing",
    "Transport-moving",
    "Priv-house-serv",
    "Protective-serv",
    "Armed-Forces",
];

const RELATIONSHIP: &[&str] = &[
    "Wife",
    "Own-child",
    "Husband",
    "Not-in-family",
    "Other-relative",
    "Unmarried",
];

const RACE: &[&str] = &[
    "White",
    "Asian-Pac-Islander",
    "Amer-Indian-Eskimo",
    "Other",
    "Black",
];

const SEX: &[&str] = &["Female", "Male"];

// Spellings follow the upstream data file, typos included.
const NATIVE_COUNTRY: &[&str] = &[
    "United-States",
    "Cambodia",
    "England",
    "Puerto-Rico",
    "Canada",
    "Germany",
    "Outlying-US(Guam-USVI-etc)",
    "India",
    "Japan",
    "Greece",
    "South",
    "China",
    "Cuba",
    "Iran",
    "Honduras",
    "Philippines",
    "Italy",
    "Poland",
    "Jamaica",
    "Vietnam",
    "Mexico",
    "Portugal",
    "Ireland",
    "France",
    "Dominican-Republic",
    "Laos",
    "Ecuador",
    "Taiwan",
    "Haiti",
    "Columbia",
    "Hungary",
    "Guatemala",
    "Nicaragua",
    "Scotland",
    "Thailand",
    "Yugoslavia",
    "El-Salvador",
    "Trinadad&Tobago",
    "Peru",
    "Hong",
    "Holand-Netherlands",
];

const INCOME: &[&str] = &[">50K", "<=50K"];

pub(super) fn schema() -> TableSchema {
    TableSchema {
        name: "adult_income".to_owned(),
        columns: vec![
            ColumnRule::integer("age").between(0, 120),
            ColumnRule::text("workclass").one_of(WORKCLASS),
            ColumnRule::integer("fnlwgt"),
            ColumnRule::text("education").one_of(EDUCATION),
            ColumnRule::integer("education-num").between(0, 50),
            ColumnRule::text("marital-status").one_of(MARITAL_STATUS),
            ColumnRule::text("occupation").one_of(OCCUPATION),
            ColumnRule::text("relationship").one_of(RELATIONSHIP),
            ColumnRule::text("race").one_of(RACE),
            ColumnRule::text("sex").one_of(SEX),
            ColumnRule::integer("capital-gain"),
            ColumnRule::integer("capital-loss"),
            ColumnRule::integer("hours-per-week").between(0, 120),
            ColumnRule::text("native-country").one_of(NATIVE_COUNTRY),
            ColumnRule::text("income").one_of(INCOME),
        ],
        table_checks: TableChecks::default(),
    }
}
