//! 將原始清單項目、details 與在地化商品名稱合併成顯示用的項目。

use crate::domain::model::{ArticleCatalog, DetailRecord, NormalizedItem, RawListEntry};
use crate::utils::error::{BringError, Result};

const SPECIFICATION_SEPARATOR: char = '+';

/// details 查詢結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailLookup<'a> {
    Found(&'a DetailRecord),
    NotFound,
}

/// 線性搜尋，第一筆 itemId 相符者勝出
pub fn lookup_detail<'a>(name: &str, details: &'a [DetailRecord]) -> DetailLookup<'a> {
    details
        .iter()
        .find(|d| d.item_id == name)
        .map_or(DetailLookup::NotFound, DetailLookup::Found)
}

/// 轉小寫後替換 é ä ö ü、連字號與空白；其他字元不變
pub fn purge(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.to_lowercase().chars() {
        match c {
            'é' => out.push('e'),
            'ä' => out.push_str("ae"),
            '-' => out.push('_'),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            ' ' => out.push('_'),
            other => out.push(other),
        }
    }
    out
}

/// 決定圖示與顯示名稱。
///
/// 有在地化名稱時只翻譯名稱，不會退回首字元圖示；
/// 只有在 catalog 與 details 都沒有命中時，圖示才取原始 id 的第一個字元。
pub fn resolve_display(
    entry: &RawListEntry,
    lookup: DetailLookup<'_>,
    catalog: &ArticleCatalog,
) -> Result<(String, String)> {
    let translated = catalog.get(&entry.name);

    let image = match (lookup, translated) {
        (DetailLookup::Found(detail), _) => {
            detail.user_icon_item_id.clone().ok_or_else(|| {
                BringError::shape(format!(
                    "detail record '{}' has no userIconItemId",
                    detail.item_id
                ))
            })?
        }
        (DetailLookup::NotFound, Some(_)) => entry.name.clone(),
        (DetailLookup::NotFound, None) => entry
            .name
            .chars()
            .next()
            .map(String::from)
            .ok_or_else(|| BringError::shape("list entry has an empty name"))?,
    };

    let name = translated.cloned().unwrap_or_else(|| entry.name.clone());
    Ok((name, image))
}

/// 把 "a + b" 拆成多個規格；n 個分隔符號一定產生 n+1 筆，空段落也保留
fn split_specification(specification: &str) -> Vec<String> {
    if !specification.contains(SPECIFICATION_SEPARATOR) {
        return vec![specification.to_string()];
    }

    specification
        .split(SPECIFICATION_SEPARATOR)
        .map(|segment| segment.trim().to_string())
        .collect()
}

pub fn normalize_entry(
    entry: &RawListEntry,
    details: &[DetailRecord],
    catalog: &ArticleCatalog,
) -> Result<Vec<NormalizedItem>> {
    let lookup = lookup_detail(&entry.name, details);
    let (name, image) = resolve_display(entry, lookup, catalog)?;
    let image = purge(&image);

    Ok(split_specification(&entry.specification)
        .into_iter()
        .map(|specification| NormalizedItem {
            name: name.clone(),
            specification,
            image: image.clone(),
            key: image.clone(),
        })
        .collect())
}

/// 保持輸入順序，拆出的規格緊接在原位置
pub fn reconcile(
    entries: &[RawListEntry],
    details: &[DetailRecord],
    catalog: &ArticleCatalog,
) -> Result<Vec<NormalizedItem>> {
    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        items.extend(normalize_entry(entry, details, catalog)?);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, specification: &str) -> RawListEntry {
        RawListEntry {
            name: name.to_string(),
            specification: specification.to_string(),
        }
    }

    fn detail(item_id: &str, icon: &str) -> DetailRecord {
        DetailRecord {
            item_id: item_id.to_string(),
            user_icon_item_id: Some(icon.to_string()),
        }
    }

    fn catalog(pairs: &[(&str, &str)]) -> ArticleCatalog {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_purge_replacements() {
        assert_eq!(purge("É-Ü"), "e_ue");
        assert_eq!(purge("Äpfel"), "aepfel");
        assert_eq!(purge("Brötchen"), "broetchen");
        assert_eq!(purge("Crème fraîche"), "crème_fraîche");
        assert_eq!(purge("Café au lait"), "cafe_au_lait");
    }

    #[test]
    fn test_purge_is_idempotent() {
        for input in ["É-Ü", "Grüner Salat", "Käse-Brötchen", "x1", "Crème fraîche", ""] {
            let once = purge(input);
            assert_eq!(purge(&once), once);
        }
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let details = vec![detail("x1", "first"), detail("x1", "second")];
        match lookup_detail("x1", &details) {
            DetailLookup::Found(d) => assert_eq!(d.user_icon_item_id.as_deref(), Some("first")),
            DetailLookup::NotFound => panic!("expected a match"),
        }
        assert_eq!(lookup_detail("x2", &details), DetailLookup::NotFound);
    }

    #[test]
    fn test_no_detail_no_catalog_falls_back_to_first_character() {
        let items = reconcile(&[entry("Zucchetti", "3")], &[], &catalog(&[])).unwrap();
        assert_eq!(
            items,
            vec![NormalizedItem {
                name: "Zucchetti".to_string(),
                specification: "3".to_string(),
                image: "z".to_string(),
                key: "z".to_string(),
            }]
        );
    }

    #[test]
    fn test_catalog_match_translates_without_icon_fallback() {
        let items = reconcile(&[entry("milk", "1L")], &[], &catalog(&[("milk", "Milk")])).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Milk");
        assert_eq!(items[0].specification, "1L");
        assert_eq!(items[0].image, "milk");
        assert_eq!(items[0].key, "milk");
    }

    #[test]
    fn test_detail_match_wins_over_catalog() {
        let details = vec![detail("Milch", "Milch-Bio")];
        let items = reconcile(
            &[entry("Milch", "")],
            &details,
            &catalog(&[("Milch", "Milk")]),
        )
        .unwrap();
        assert_eq!(items[0].name, "Milk");
        assert_eq!(items[0].image, "milch_bio");
        assert_eq!(items[0].key, items[0].image);
    }

    #[test]
    fn test_split_specification_with_detail() {
        let details = vec![detail("x1", "Icon-X")];
        let items = reconcile(&[entry("x1", "a + b")], &details, &catalog(&[])).unwrap();
        assert_eq!(items.len(), 2);
        for (item, spec) in items.iter().zip(["a", "b"]) {
            assert_eq!(item.name, "x1");
            assert_eq!(item.specification, spec);
            assert_eq!(item.image, "icon_x");
            assert_eq!(item.key, "icon_x");
        }
    }

    #[test]
    fn test_n_separators_yield_n_plus_one_items_in_order() {
        let items = reconcile(&[entry("x1", " 1 +2+ 3 + 4")], &[], &catalog(&[])).unwrap();
        let specs: Vec<&str> = items.iter().map(|i| i.specification.as_str()).collect();
        assert_eq!(specs, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_empty_segments_are_kept() {
        let items = reconcile(&[entry("x1", "a + + b")], &[], &catalog(&[])).unwrap();
        let specs: Vec<&str> = items.iter().map(|i| i.specification.as_str()).collect();
        assert_eq!(specs, vec!["a", "", "b"]);

        let items = reconcile(&[entry("x1", " + ")], &[], &catalog(&[])).unwrap();
        let specs: Vec<&str> = items.iter().map(|i| i.specification.as_str()).collect();
        assert_eq!(specs, vec!["", ""]);

        let items = reconcile(&[entry("x1", "a+")], &[], &catalog(&[])).unwrap();
        let specs: Vec<&str> = items.iter().map(|i| i.specification.as_str()).collect();
        assert_eq!(specs, vec!["a", ""]);
    }

    #[test]
    fn test_separator_count_matches_item_count_with_empty_segments() {
        for spec in ["a + + b", " + ", "a+", "+a+", "1 + 2 + + 3 +"] {
            let separators = spec.matches('+').count();
            let items = reconcile(&[entry("x1", spec)], &[], &catalog(&[])).unwrap();
            assert_eq!(items.len(), separators + 1, "specification {:?}", spec);
            assert!(items.iter().all(|i| i.name == "x1" && i.image == "x" && i.key == "x"));
        }
    }

    #[test]
    fn test_specification_without_separator_is_kept_verbatim() {
        let items = reconcile(&[entry("x1", "  2 Stück ")], &[], &catalog(&[])).unwrap();
        assert_eq!(items[0].specification, "  2 Stück ");
    }

    #[test]
    fn test_output_preserves_entry_order() {
        let entries = vec![entry("a", "1+2"), entry("b", "x"), entry("c", "y + z")];
        let items = reconcile(&entries, &[], &catalog(&[])).unwrap();
        let keys: Vec<(&str, &str)> = items
            .iter()
            .map(|i| (i.name.as_str(), i.specification.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("a", "1"), ("a", "2"), ("b", "x"), ("c", "y"), ("c", "z")]
        );
    }

    #[test]
    fn test_matched_detail_without_icon_is_an_error() {
        let details = vec![DetailRecord {
            item_id: "x1".to_string(),
            user_icon_item_id: None,
        }];
        let err = reconcile(&[entry("x1", "")], &details, &catalog(&[])).unwrap_err();
        assert!(matches!(err, BringError::ShapeError { .. }));
    }

    #[test]
    fn test_empty_name_without_matches_is_an_error() {
        assert!(reconcile(&[entry("", "1")], &[], &catalog(&[])).is_err());
    }
}
