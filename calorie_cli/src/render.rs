//! Console rendering of API responses and day logs.

use calorie_core::usda::{FoodDetail, FoodList, SearchList};
use calorie_core::{to_tab_indented, ApiResponse, DayLog, Result};
use chrono::NaiveDate;

pub fn render(response: &ApiResponse) -> String {
    match response {
        ApiResponse::List(list) => render_list(list),
        ApiResponse::Search(search) => render_search(search),
        ApiResponse::Detail(detail) => render_detail(detail),
    }
}

fn render_list(list: &FoodList) -> String {
    list.list
        .item
        .iter()
        .map(|item| {
            format!(
                "{}: {{\n  Ndbno: {}\n  Name: {}\n}}\n",
                item.offset, item.id, item.name
            )
        })
        .collect()
}

fn render_search(search: &SearchList) -> String {
    search
        .list
        .item
        .iter()
        .map(|item| {
            format!(
                "{}: {{\n  Group: {}\n  Name: {}\n  Ndbno: {}\n  Database: {}\n  Manufacturer: {}\n}}\n",
                item.offset, item.group, item.name, item.ndbno, item.ds, item.manu
            )
        })
        .collect()
}

fn render_detail(detail: &FoodDetail) -> String {
    let mut out = String::new();
    for report in &detail.foods {
        let food = &report.food;
        out.push_str(&format!(
            "{{\n  Ndbno: {}\n  Name: {}\n  Nutrients: [\n",
            food.desc.ndbno, food.desc.name
        ));
        for nutrient in &food.nutrients {
            out.push_str(&format!(
                "    {{\n       NutrientID: {}\n       Name: {}\n       Unit: {}\n       Value: {}\n    }}\n",
                nutrient.nutrient_id, nutrient.name, nutrient.unit, nutrient.value
            ));
        }
        out.push_str("  ]\n}\n");
    }
    out
}

/// The day's records as tab-indented JSON, followed by its totals
pub fn render_day(date: NaiveDate, day: &DayLog) -> Result<String> {
    let json = String::from_utf8_lossy(&to_tab_indented(day)?).into_owned();
    let totals = day.totals();

    Ok(format!(
        "{json}\n\nTotals for {date} ({grams:.0} g eaten):\n  Energy: {energy:.1} kcal\n  Protein: {protein:.1} g\n  Fat: {fat:.1} g\n  Carbohydrate: {carbohydrate:.1} g\n  Fiber: {fiber:.1} g\n",
        grams = totals.grams,
        energy = totals.energy,
        protein = totals.protein,
        fat = totals.fat,
        carbohydrate = totals.carbohydrate,
        fiber = totals.fiber,
    ))
}
