//! Test helpers for writing catalogs and capturing command output.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tempfile::TempDir;

/// Four central-Seoul destinations in the catalog wire format.
pub(super) const SAMPLE_CATALOG: &str = r#"[
  {
    "id": "gyeongbokgung",
    "name": "경복궁",
    "district": "종로구",
    "description": "조선 왕조의 법궁, 경복궁역 도보 5분",
    "tags": ["역사/문화"],
    "rating": 4.6,
    "estimatedCost": 0.3,
    "coordinates": { "lat": 37.5796, "lng": 126.9770 },
    "subway": "3호선 경복궁역 5번 출구"
  },
  {
    "id": "gwangjang-market",
    "name": "광장시장",
    "district": "종로구",
    "description": "빈대떡과 육회로 유명한 전통시장",
    "tags": ["맛집"],
    "rating": 4.4,
    "estimatedCost": 2,
    "coordinates": { "lat": 37.5700, "lng": 126.9996 }
  },
  {
    "id": "n-seoul-tower",
    "name": "N서울타워",
    "district": "용산구",
    "description": "서울 시내 전망 명소",
    "tags": ["자연/공원"],
    "rating": 4.5,
    "estimatedCost": 2.1,
    "coordinates": { "lat": 37.5512, "lng": 126.9882 }
  },
  {
    "id": "national-museum",
    "name": "국립중앙박물관",
    "district": "용산구",
    "description": "한국 최대 규모의 박물관",
    "tags": ["박물관/미술관"],
    "rating": 4.7,
    "estimatedCost": 0,
    "coordinates": { "lat": 37.5239, "lng": 126.9803 }
  }
]"#;

/// Temporary directory holding a catalog file.
pub(super) struct CatalogWorkspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
    catalog: Utf8PathBuf,
}

impl CatalogWorkspace {
    /// Create a workspace whose catalog holds `SAMPLE_CATALOG`.
    pub(super) fn new() -> Self {
        Self::with_contents(SAMPLE_CATALOG.as_bytes())
    }

    /// Create a workspace whose catalog holds `contents`.
    pub(super) fn with_contents(contents: &[u8]) -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let catalog = root.join("catalog.json");
        write_utf8(&catalog, contents);
        Self {
            _tmp: tmp,
            root,
            catalog,
        }
    }

    pub(super) fn catalog(&self) -> &Utf8Path {
        &self.catalog
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write file");
}

/// Parse captured stdout as JSON.
pub(super) fn parse_output(buffer: &[u8]) -> Value {
    let text = std::str::from_utf8(buffer).expect("stdout utf-8");
    assert!(text.ends_with('\n'), "output should end with a newline");
    serde_json::from_str(text).expect("output should be JSON")
}

/// Collect the `id` of every object in a JSON array.
pub(super) fn ids(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .expect("JSON array")
        .iter()
        .map(|entry| entry["id"].as_str().expect("string id"))
        .collect()
}

/// Collect the destination ids of a JSON array of scored destinations.
pub(super) fn scored_ids(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .expect("JSON array")
        .iter()
        .map(|entry| {
            entry["destination"]["id"]
                .as_str()
                .expect("string destination id")
        })
        .collect()
}
