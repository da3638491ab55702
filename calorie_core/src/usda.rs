//! Response shapes of the USDA National Nutrient Database API.
//!
//! Only the fields the tracker reads or renders are modelled; everything else
//! in the payload is ignored. Missing fields fall back to their defaults.

use serde::{Deserialize, Deserializer};

// ============================================================================
// List endpoint
// ============================================================================

/// Body of `GET /list/`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FoodList {
    pub list: FoodListPage,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FoodListPage {
    /// List type (`f` for foods)
    pub lt: String,
    pub start: u32,
    pub end: u32,
    pub total: u32,
    pub sr: String,
    pub sort: String,
    pub item: Vec<FoodListItem>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FoodListItem {
    pub offset: u32,
    /// The food identifier (ndbno)
    pub id: String,
    pub name: String,
}

// ============================================================================
// Search endpoint
// ============================================================================

/// Body of `GET /search/`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchList {
    pub list: SearchPage,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchPage {
    pub q: String,
    pub sr: String,
    pub ds: String,
    pub start: u32,
    pub end: u32,
    pub total: u32,
    pub group: String,
    pub sort: String,
    pub item: Vec<SearchItem>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchItem {
    pub offset: u32,
    pub group: String,
    pub name: String,
    pub ndbno: String,
    /// Data source (`SR` standard reference, `BL` branded)
    pub ds: String,
    pub manu: String,
}

// ============================================================================
// Food report endpoint
// ============================================================================

/// Body of `GET /V2/reports`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FoodDetail {
    pub foods: Vec<FoodReport>,
    pub count: u32,
    pub notfound: u32,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FoodReport {
    pub food: FoodReportBody,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FoodReportBody {
    pub sr: String,
    #[serde(rename = "type")]
    pub report_type: String,
    pub desc: FoodDescription,
    pub nutrients: Vec<NutrientEntry>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FoodDescription {
    pub ndbno: String,
    pub name: String,
    /// Short description
    pub sd: String,
    /// Food group
    pub fg: String,
    pub manu: String,
    pub ds: String,
    /// Reporting unit
    pub ru: String,
}

/// One nutrient row of a food report
///
/// The service has shipped codes and values both as JSON strings and as
/// numbers; both are normalized to strings here.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NutrientEntry {
    #[serde(deserialize_with = "string_or_number")]
    pub nutrient_id: String,
    pub name: String,
    pub group: String,
    pub unit: String,
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Null => String::new(),
    })
}

// ============================================================================
// Rendering dispatch
// ============================================================================

/// Any response the API client can return, for explicit rendering dispatch
#[derive(Clone, Debug)]
pub enum ApiResponse {
    List(FoodList),
    Search(SearchList),
    Detail(FoodDetail),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let json = r#"{"list": {"lt": "f", "start": 0, "end": 2, "total": 8790, "sr": "Legacy", "sort": "n",
            "item": [
                {"offset": 0, "id": "01009", "name": "Cheese, cheddar"},
                {"offset": 1, "id": "09003", "name": "Apples, raw, with skin"}
            ]}}"#;

        let list: FoodList = serde_json::from_str(json).unwrap();
        assert_eq!(list.list.total, 8790);
        assert_eq!(list.list.item.len(), 2);
        assert_eq!(list.list.item[1].id, "09003");
    }

    #[test]
    fn test_parse_search_with_missing_fields() {
        let json = r#"{"list": {"q": "butter", "item": [
            {"offset": 0, "group": "Branded Food Products Database", "name": "BUTTER", "ndbno": "45011419", "ds": "LI"}
        ]}}"#;

        let search: SearchList = serde_json::from_str(json).unwrap();
        assert_eq!(search.list.q, "butter");
        assert_eq!(search.list.item[0].ndbno, "45011419");
        assert!(search.list.item[0].manu.is_empty());
    }

    #[test]
    fn test_nutrient_codes_as_strings_or_numbers() {
        let json = r#"{"foods": [{"food": {"desc": {"ndbno": "01009", "name": "Cheese, cheddar"},
            "nutrients": [
                {"nutrient_id": "208", "name": "Energy", "unit": "kcal", "value": "404"},
                {"nutrient_id": 203, "name": "Protein", "unit": "g", "value": 22.87},
                {"nutrient_id": "204", "name": "Total lipid (fat)", "unit": "g", "value": null}
            ]}}], "count": 1, "notfound": 0, "api": 2.0}"#;

        let detail: FoodDetail = serde_json::from_str(json).unwrap();
        let nutrients = &detail.foods[0].food.nutrients;
        assert_eq!(nutrients[0].nutrient_id, "208");
        assert_eq!(nutrients[1].nutrient_id, "203");
        assert_eq!(nutrients[1].value, "22.87");
        assert_eq!(nutrients[2].value, "");
    }
}
