/// Base URL of the routing service, without a trailing slash
///
/// Set `BKK_ROUTE_FINDER_API_URL` at build time to point the client at a
/// different deployment.
pub const API_URL: &str = match option_env!("BKK_ROUTE_FINDER_API_URL") {
    Some(url) => url,
    None => "https://bkk-transit-website.onrender.com",
};

pub const ALL_STATIONS_PATH: &str = "/api/all-stations";
pub const LINES_AND_STATIONS_PATH: &str = "/api/lines-and-stations";
pub const FIND_PATH_PATH: &str = "/api/find-path";

pub const START_STATION_PARAM: &str = "start_station";
pub const END_STATION_PARAM: &str = "end_station";

/// Line code the backend uses for walking transfers between platforms
pub const INTERCHANGE_LINE: &str = "Interchange";

// Page copy
pub const PAGE_TITLE: &str = "ค้นหาเส้นทางรถไฟฟ้า กรุงเทพฯ";
pub const PAGE_HEADING: &str = "ค้นหาเส้นทางรถไฟฟ้า";
pub const LABEL_START: &str = "สถานีต้นทาง";
pub const LABEL_END: &str = "สถานีปลายทาง";
pub const BUTTON_SEARCH: &str = "ค้นหาเส้นทาง";
pub const BUTTON_RETRY: &str = "ลองอีกครั้ง";

// Route summary and timeline
pub const SUMMARY_TOTAL_TIME: &str = "เวลาเดินทางทั้งหมด";
pub const SUMMARY_TRANSFERS: &str = "เปลี่ยนสาย";
pub const STEP_FROM: &str = "จาก";
pub const STEP_TO: &str = "ไปยัง";

// Input placeholders
pub const PLACEHOLDER_LOADING: &str = "กำลังโหลดสถานี...";
pub const PLACEHOLDER_START: &str = "เช่น สยาม, อโศก, สีลม";
pub const PLACEHOLDER_END: &str = "เช่น หมอชิต, สุขุมวิท, บางหว้า";
pub const PLACEHOLDER_ERROR: &str = "เกิดข้อผิดพลาด";

// Inline error messages
pub const MSG_LOAD_FAILURE: &str = "ไม่สามารถเชื่อมต่อกับเซิร์ฟเวอร์ได้ กรุณาลองรีเฟรชหน้า";
pub const MSG_UNKNOWN_STATION: &str = "ไม่พบสถานีที่ระบุ กรุณาเลือกจากในรายการ";
pub const MSG_SAME_STATION: &str = "สถานีต้นทางและปลายทางต้องไม่ซ้ำกัน";
pub const MSG_ROUTE_NOT_FOUND: &str = "ไม่สามารถค้นหาเส้นทางได้";
pub const MSG_SEARCH_FAILED: &str = "เกิดข้อผิดพลาดในการค้นหาเส้นทาง";

// Sidebar copy
pub const SIDEBAR_LOADING: &str = "Loading lines...";
pub const SIDEBAR_FAILED: &str = "Failed to load data";
pub const SIDEBAR_BACK: &str = "← Back to All Lines";
