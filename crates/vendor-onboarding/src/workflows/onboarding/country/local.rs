//! Static fallback tables used when the remote country dataset is
//! unavailable or finds nothing. Entry order is load-bearing for the
//! address scan: earlier keys win.

use super::{contains_cjk, DEFAULT_COUNTRY};

/// Common country names/abbreviations mapped to the localized display name,
/// matched by case-insensitive substring containment in the address.
pub(crate) const COUNTRY_NAME_MAP: &[(&str, &str)] = &[
    // Asia
    ("china", "中国"),
    ("中国", "中国"),
    ("singapore", "Singapore"),
    ("新加坡", "Singapore"),
    ("japan", "日本"),
    ("日本", "日本"),
    ("korea", "韩国"),
    ("south korea", "韩国"),
    ("韩国", "韩国"),
    ("taiwan", "台湾"),
    ("台湾", "台湾"),
    ("hong kong", "香港"),
    ("香港", "香港"),
    ("india", "印度"),
    ("印度", "印度"),
    ("malaysia", "马来西亚"),
    ("马来西亚", "马来西亚"),
    ("thailand", "泰国"),
    ("泰国", "泰国"),
    ("vietnam", "越南"),
    ("越南", "越南"),
    ("indonesia", "印度尼西亚"),
    ("印度尼西亚", "印度尼西亚"),
    ("philippines", "菲律宾"),
    ("菲律宾", "菲律宾"),
    // Europe
    ("germany", "德国"),
    ("德国", "德国"),
    ("france", "法国"),
    ("法国", "法国"),
    ("uk", "英国"),
    ("united kingdom", "英国"),
    ("英国", "英国"),
    ("italy", "意大利"),
    ("意大利", "意大利"),
    ("spain", "西班牙"),
    ("西班牙", "西班牙"),
    ("netherlands", "荷兰"),
    ("荷兰", "荷兰"),
    ("poland", "波兰"),
    ("波兰", "波兰"),
    ("sweden", "瑞典"),
    ("瑞典", "瑞典"),
    ("switzerland", "瑞士"),
    ("瑞士", "瑞士"),
    // Americas
    ("usa", "美国"),
    ("united states", "美国"),
    ("us", "美国"),
    ("美国", "美国"),
    ("canada", "加拿大"),
    ("加拿大", "加拿大"),
    ("brazil", "巴西"),
    ("巴西", "巴西"),
    ("mexico", "墨西哥"),
    ("墨西哥", "墨西哥"),
    // Oceania
    ("australia", "澳大利亚"),
    ("澳大利亚", "澳大利亚"),
    ("new zealand", "新西兰"),
    ("新西兰", "新西兰"),
    // Middle East
    ("israel", "以色列"),
    ("以色列", "以色列"),
    ("uae", "阿联酋"),
    ("united arab emirates", "阿联酋"),
    ("阿联酋", "阿联酋"),
];

/// Exact-identifier lookup (English name or ISO code, lowercased) used when
/// the remote dataset cannot resolve a country identifier.
pub(crate) const IDENTIFIER_NAME_MAP: &[(&str, &str)] = &[
    ("china", "中国"),
    ("singapore", "新加坡"),
    ("japan", "日本"),
    ("korea", "韩国"),
    ("south korea", "韩国"),
    ("taiwan", "台湾"),
    ("hong kong", "香港"),
    ("india", "印度"),
    ("malaysia", "马来西亚"),
    ("thailand", "泰国"),
    ("vietnam", "越南"),
    ("indonesia", "印度尼西亚"),
    ("philippines", "菲律宾"),
    ("germany", "德国"),
    ("france", "法国"),
    ("united kingdom", "英国"),
    ("italy", "意大利"),
    ("spain", "西班牙"),
    ("netherlands", "荷兰"),
    ("poland", "波兰"),
    ("sweden", "瑞典"),
    ("switzerland", "瑞士"),
    ("united states", "美国"),
    ("united states of america", "美国"),
    ("canada", "加拿大"),
    ("brazil", "巴西"),
    ("mexico", "墨西哥"),
    ("australia", "澳大利亚"),
    ("new zealand", "新西兰"),
    ("israel", "以色列"),
    ("united arab emirates", "阿联酋"),
    ("cn", "中国"),
    ("sg", "新加坡"),
    ("jp", "日本"),
    ("kr", "韩国"),
    ("tw", "台湾"),
    ("hk", "香港"),
    ("in", "印度"),
    ("my", "马来西亚"),
    ("th", "泰国"),
    ("vn", "越南"),
    ("id", "印度尼西亚"),
    ("ph", "菲律宾"),
    ("de", "德国"),
    ("fr", "法国"),
    ("gb", "英国"),
    ("uk", "英国"),
    ("it", "意大利"),
    ("es", "西班牙"),
    ("nl", "荷兰"),
    ("pl", "波兰"),
    ("se", "瑞典"),
    ("ch", "瑞士"),
    ("us", "美国"),
    ("usa", "美国"),
    ("ca", "加拿大"),
    ("br", "巴西"),
    ("mx", "墨西哥"),
    ("au", "澳大利亚"),
    ("nz", "新西兰"),
    ("il", "以色列"),
    ("ae", "阿联酋"),
    ("uae", "阿联酋"),
];

/// Abbreviations the reference dataset does not carry, checked by plain
/// substring containment against the lowercased address.
pub(crate) const SPECIAL_ABBREVIATIONS: &[(&str, &str)] = &[
    ("usa", "美国"),
    ("u.s.a", "美国"),
    ("u.s.", "美国"),
    ("uk", "英国"),
    ("u.k.", "英国"),
    ("uae", "阿联酋"),
    ("hk", "香港"),
    ("tw", "台湾"),
    ("sg", "新加坡"),
];

/// Synchronous, pure country inference over the local tables only. Empty
/// return means "undetected, ask the user".
pub fn infer_country_local(address: &str) -> String {
    if address.is_empty() {
        return DEFAULT_COUNTRY.to_string();
    }

    let address_lower = address.to_lowercase();
    for (key, name) in COUNTRY_NAME_MAP {
        if address_lower.contains(&key.to_lowercase()) {
            return (*name).to_string();
        }
    }

    if contains_cjk(address) {
        return DEFAULT_COUNTRY.to_string();
    }

    String::new()
}

/// Resolve a bare identifier (name or ISO code) against the local table,
/// echoing the identifier back when nothing matches.
pub(crate) fn local_name_for_identifier(identifier: &str) -> String {
    let key = identifier.trim().to_lowercase();
    IDENTIFIER_NAME_MAP
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| identifier.to_string())
}
