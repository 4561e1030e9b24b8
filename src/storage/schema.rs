//! Database schema definitions

/// SQL to create the clients table
pub const CREATE_CLIENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS clients (
    client_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    contact TEXT,
    email TEXT
)
"#;

/// SQL to create the lawyers table
pub const CREATE_LAWYERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS lawyers (
    lawyer_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    specialization TEXT,
    contact TEXT
)
"#;

/// SQL to create the cases table.
/// The foreign keys are declarations only; writes never check them.
pub const CREATE_CASES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS cases (
    case_id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    client_id INTEGER,
    lawyer_id INTEGER,
    status TEXT,
    description TEXT,
    FOREIGN KEY(client_id) REFERENCES clients(client_id),
    FOREIGN KEY(lawyer_id) REFERENCES lawyers(lawyer_id)
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_cases_client ON cases(client_id)",
    "CREATE INDEX IF NOT EXISTS idx_cases_lawyer ON cases(lawyer_id)",
];

/// All schema creation statements, safe to run against an initialized store
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![
        CREATE_CLIENTS_TABLE,
        CREATE_LAWYERS_TABLE,
        CREATE_CASES_TABLE,
    ];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
