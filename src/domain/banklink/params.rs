/// ---- Protocol constants (banklink v1 field set) ----
/// Service ids, the accepted callback version, and the canonical signed-field
/// order are wire commitments. Defaults mirror the production bank endpoint
/// this handshake targets.
pub const AUTH_SERVICE_ID: &str = "0005"; // outbound service-type code
pub const CALLBACK_SERVICE_ID: &str = "0001"; // only accepted callback service
pub const CALLBACK_VERSION: &str = "001"; // only accepted callback schema version

pub const DEFAULT_SITE: &str = "https://ibanka.seb.lv/ipc/epakindex.jsp";
pub const DEFAULT_LANG: &str = "LAT";
pub const DEFAULT_BUTTON_LABEL: &str = "Click here if you are not redirected";

/// Wire field names, both directions.
pub mod field {
    pub const SND_ID: &str = "SND_ID";
    pub const SERVICE: &str = "SERVICE";
    pub const LANG: &str = "LANG";
    pub const CRC: &str = "CRC";
    pub const REC_ID: &str = "REC_ID";
    pub const USER: &str = "USER";
    pub const DATE: &str = "DATE";
    pub const TIME: &str = "TIME";
    pub const USER_INFO: &str = "USER_INFO";
    pub const VERSION: &str = "VERSION";
}

/// The eight callback fields covered by the signature, in signing order.
/// Permuting this order changes the signature input and fails verification.
pub const SIGNED_CALLBACK_FIELDS: [&str; 8] = [
    field::SND_ID,
    field::SERVICE,
    field::REC_ID,
    field::USER,
    field::DATE,
    field::TIME,
    field::USER_INFO,
    field::VERSION,
];
