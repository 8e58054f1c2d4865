pub const DATA_PATH: &str = "/api/data";
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5001";
pub const DEFAULT_PORT: u16 = 8084;
pub const REPORT_TITLE: &str = "Quant Small Cap Fund";
pub const DATA_FILE_MISSING: &str = "Data file not found. Please run aggregator first.";
