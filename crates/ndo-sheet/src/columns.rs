//! EPG Selection sheet layout, shared by the writer and the reader.

/// Name of the operator-edited sheet.
pub const SELECTION_SHEET: &str = "EPG Selection";

/// Column headers, in cell order. The reader addresses cells by these
/// indexes, so the order here is the contract between export and import.
pub const SELECTION_HEADERS: [&str; 23] = [
    "Source Site ID",
    "Source Tenant ID",
    "Source Tenant Name",
    "Source Schema ID",
    "Source Template",
    "Source ANP",
    "Source BD",
    "Source EPG",
    "Destination Tenant ID",
    "Destination Tenant Name",
    "Destination Site ID",
    "Destination Schema ID",
    "Destination Template",
    "Destination ANP",
    "Destination VRF Reference",
    "Destination BD",
    "Destination EPG",
    "Destination L3Out 1",
    "Destination L3Out Ref 1",
    "Destination L3Out 2",
    "Destination L3Out Ref 2",
    "Consumer Contract Ref",
    "Host-Based Routing",
];

pub const COL_SRC_SITE_ID: usize = 0;
pub const COL_SRC_TENANT_ID: usize = 1;
pub const COL_SRC_TENANT_NAME: usize = 2;
pub const COL_SRC_SCHEMA_ID: usize = 3;
pub const COL_SRC_TEMPLATE: usize = 4;
pub const COL_SRC_ANP: usize = 5;
pub const COL_SRC_BD: usize = 6;
pub const COL_SRC_EPG: usize = 7;
pub const COL_DST_TENANT_ID: usize = 8;
pub const COL_DST_TENANT_NAME: usize = 9;
pub const COL_DST_SITE_ID: usize = 10;
pub const COL_DST_SCHEMA_ID: usize = 11;
pub const COL_DST_TEMPLATE: usize = 12;
pub const COL_DST_ANP: usize = 13;
pub const COL_DST_VRF_REF: usize = 14;
pub const COL_DST_BD: usize = 15;
pub const COL_DST_EPG: usize = 16;
pub const COL_DST_L3OUT_1: usize = 17;
pub const COL_DST_L3OUT_REF_1: usize = 18;
pub const COL_DST_L3OUT_2: usize = 19;
pub const COL_DST_L3OUT_REF_2: usize = 20;
pub const COL_DST_CONSUMER_CONTRACT: usize = 21;
pub const COL_DST_HOST_BASED_ROUTING: usize = 22;
