//! Fixed lookup tables shared by the filter and ranking stages.
//!
//! Interest keywords are matched in English and Persian; the app's users
//! type either. Tables are kept as explicit matches so their exact
//! contents stay testable.

use crate::models::{PlaceType, TravelType};

/// "Suitable for" tags a travel party maps to. Places whose tag set does
/// not overlap are filtered out at the query level; restaurants are never
/// subjected to this filter (longstanding asymmetry in the product,
/// preserved deliberately).
pub fn suitable_for_tags(travel_type: TravelType) -> &'static [&'static str] {
    match travel_type {
        TravelType::Solo => &["solo"],
        TravelType::Couple => &["couple"],
        TravelType::FamilyWithKids => &["family", "kids"],
        TravelType::FamilyAdults => &["family"],
        TravelType::Friends => &["friends", "group"],
    }
}

/// Map a free-text interest keyword to a place type. Keywords are matched
/// lowercased; unknown keywords map to nothing.
pub fn keyword_place_type(keyword: &str) -> Option<PlaceType> {
    match keyword.trim().to_lowercase().as_str() {
        "nature" | "طبیعت" => Some(PlaceType::Nature),
        "forest" | "جنگل" => Some(PlaceType::Forest),
        "waterfall" | "آبشار" => Some(PlaceType::Waterfall),
        "beach" | "ساحل" | "دریا" => Some(PlaceType::Beach),
        "mountain" | "کوه" | "کوهستان" => Some(PlaceType::Mountain),
        "historical" | "history" | "تاریخی" => Some(PlaceType::Historical),
        "cultural" | "culture" | "فرهنگی" => Some(PlaceType::Cultural),
        "museum" | "موزه" => Some(PlaceType::Museum),
        "park" | "پارک" => Some(PlaceType::Park),
        "entertainment" | "fun" | "تفریح" | "تفریحی" => Some(PlaceType::Entertainment),
        "religious" | "مذهبی" | "زیارتی" => Some(PlaceType::Religious),
        _ => None,
    }
}

/// Catch-all keywords that keep every restaurant regardless of category.
pub fn is_restaurant_keyword(keyword: &str) -> bool {
    matches!(
        keyword.trim().to_lowercase().as_str(),
        "restaurant" | "رستوران" | "food" | "غذا"
    )
}

/// Catch-all keywords that keep every place regardless of type.
pub fn is_generic_place_keyword(keyword: &str) -> bool {
    matches!(
        keyword.trim().to_lowercase().as_str(),
        "place" | "places" | "مکان" | "جاذبه"
    )
}

/// Preference-map key a place type contributes to in trip ranking.
/// Unmapped types fall into the generic "place" bucket.
pub fn preference_label(place_type: PlaceType) -> &'static str {
    match place_type {
        PlaceType::Nature | PlaceType::Forest | PlaceType::Waterfall => "nature",
        PlaceType::Beach => "beach",
        PlaceType::Mountain => "mountain",
        PlaceType::Historical => "historical",
        PlaceType::Cultural => "cultural",
        PlaceType::Entertainment | PlaceType::Park => "entertainment",
        PlaceType::Museum | PlaceType::Religious | PlaceType::Other => "place",
    }
}
