use std::{fmt, str::FromStr};

/// One of Japan's 47 prefectures, in JIS X 0401 order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefecture {
    Hokkaido,
    Aomori,
    Iwate,
    Miyagi,
    Akita,
    Yamagata,
    Fukushima,
    Ibaraki,
    Tochigi,
    Gunma,
    Saitama,
    Chiba,
    Tokyo,
    Kanagawa,
    Niigata,
    Toyama,
    Ishikawa,
    Fukui,
    Yamanashi,
    Nagano,
    Gifu,
    Shizuoka,
    Aichi,
    Mie,
    Shiga,
    Kyoto,
    Osaka,
    Hyogo,
    Nara,
    Wakayama,
    Tottori,
    Shimane,
    Okayama,
    Hiroshima,
    Yamaguchi,
    Tokushima,
    Kagawa,
    Ehime,
    Kochi,
    Fukuoka,
    Saga,
    Nagasaki,
    Kumamoto,
    Oita,
    Miyazaki,
    Kagoshima,
    Okinawa,
}

impl Prefecture {
    pub const ALL: [Prefecture; 47] = [
        Prefecture::Hokkaido,
        Prefecture::Aomori,
        Prefecture::Iwate,
        Prefecture::Miyagi,
        Prefecture::Akita,
        Prefecture::Yamagata,
        Prefecture::Fukushima,
        Prefecture::Ibaraki,
        Prefecture::Tochigi,
        Prefecture::Gunma,
        Prefecture::Saitama,
        Prefecture::Chiba,
        Prefecture::Tokyo,
        Prefecture::Kanagawa,
        Prefecture::Niigata,
        Prefecture::Toyama,
        Prefecture::Ishikawa,
        Prefecture::Fukui,
        Prefecture::Yamanashi,
        Prefecture::Nagano,
        Prefecture::Gifu,
        Prefecture::Shizuoka,
        Prefecture::Aichi,
        Prefecture::Mie,
        Prefecture::Shiga,
        Prefecture::Kyoto,
        Prefecture::Osaka,
        Prefecture::Hyogo,
        Prefecture::Nara,
        Prefecture::Wakayama,
        Prefecture::Tottori,
        Prefecture::Shimane,
        Prefecture::Okayama,
        Prefecture::Hiroshima,
        Prefecture::Yamaguchi,
        Prefecture::Tokushima,
        Prefecture::Kagawa,
        Prefecture::Ehime,
        Prefecture::Kochi,
        Prefecture::Fukuoka,
        Prefecture::Saga,
        Prefecture::Nagasaki,
        Prefecture::Kumamoto,
        Prefecture::Oita,
        Prefecture::Miyazaki,
        Prefecture::Kagoshima,
        Prefecture::Okinawa,
    ];

    /// Name as written in Japanese, e.g. `東京都`. This is the value the form submits.
    pub fn name(self) -> &'static str {
        match self {
            Prefecture::Hokkaido => "北海道",
            Prefecture::Aomori => "青森県",
            Prefecture::Iwate => "岩手県",
            Prefecture::Miyagi => "宮城県",
            Prefecture::Akita => "秋田県",
            Prefecture::Yamagata => "山形県",
            Prefecture::Fukushima => "福島県",
            Prefecture::Ibaraki => "茨城県",
            Prefecture::Tochigi => "栃木県",
            Prefecture::Gunma => "群馬県",
            Prefecture::Saitama => "埼玉県",
            Prefecture::Chiba => "千葉県",
            Prefecture::Tokyo => "東京都",
            Prefecture::Kanagawa => "神奈川県",
            Prefecture::Niigata => "新潟県",
            Prefecture::Toyama => "富山県",
            Prefecture::Ishikawa => "石川県",
            Prefecture::Fukui => "福井県",
            Prefecture::Yamanashi => "山梨県",
            Prefecture::Nagano => "長野県",
            Prefecture::Gifu => "岐阜県",
            Prefecture::Shizuoka => "静岡県",
            Prefecture::Aichi => "愛知県",
            Prefecture::Mie => "三重県",
            Prefecture::Shiga => "滋賀県",
            Prefecture::Kyoto => "京都府",
            Prefecture::Osaka => "大阪府",
            Prefecture::Hyogo => "兵庫県",
            Prefecture::Nara => "奈良県",
            Prefecture::Wakayama => "和歌山県",
            Prefecture::Tottori => "鳥取県",
            Prefecture::Shimane => "島根県",
            Prefecture::Okayama => "岡山県",
            Prefecture::Hiroshima => "広島県",
            Prefecture::Yamaguchi => "山口県",
            Prefecture::Tokushima => "徳島県",
            Prefecture::Kagawa => "香川県",
            Prefecture::Ehime => "愛媛県",
            Prefecture::Kochi => "高知県",
            Prefecture::Fukuoka => "福岡県",
            Prefecture::Saga => "佐賀県",
            Prefecture::Nagasaki => "長崎県",
            Prefecture::Kumamoto => "熊本県",
            Prefecture::Oita => "大分県",
            Prefecture::Miyazaki => "宮崎県",
            Prefecture::Kagoshima => "鹿児島県",
            Prefecture::Okinawa => "沖縄県",
        }
    }

    /// City the provider knows this prefecture by (usually the capital).
    pub fn city(self) -> &'static str {
        match self {
            Prefecture::Hokkaido => "Sapporo",
            Prefecture::Aomori => "Aomori",
            Prefecture::Iwate => "Morioka",
            Prefecture::Miyagi => "Sendai",
            Prefecture::Akita => "Akita",
            Prefecture::Yamagata => "Yamagata",
            Prefecture::Fukushima => "Fukushima",
            Prefecture::Ibaraki => "Mito",
            Prefecture::Tochigi => "Utsunomiya",
            Prefecture::Gunma => "Maebashi",
            Prefecture::Saitama => "Saitama",
            Prefecture::Chiba => "Chiba",
            Prefecture::Tokyo => "Tokyo",
            Prefecture::Kanagawa => "Yokohama",
            Prefecture::Niigata => "Niigata",
            Prefecture::Toyama => "Toyama",
            Prefecture::Ishikawa => "Kanazawa",
            Prefecture::Fukui => "Fukui",
            Prefecture::Yamanashi => "Kofu",
            Prefecture::Nagano => "Nagano",
            Prefecture::Gifu => "Gifu",
            Prefecture::Shizuoka => "Shizuoka",
            Prefecture::Aichi => "Nagoya",
            Prefecture::Mie => "Tsu",
            Prefecture::Shiga => "Otsu",
            Prefecture::Kyoto => "Kyoto",
            Prefecture::Osaka => "Osaka",
            Prefecture::Hyogo => "Kobe",
            Prefecture::Nara => "Nara",
            Prefecture::Wakayama => "Wakayama",
            Prefecture::Tottori => "Tottori",
            Prefecture::Shimane => "Matsue",
            Prefecture::Okayama => "Okayama",
            Prefecture::Hiroshima => "Hiroshima",
            Prefecture::Yamaguchi => "Yamaguchi",
            Prefecture::Tokushima => "Tokushima",
            Prefecture::Kagawa => "Takamatsu",
            Prefecture::Ehime => "Matsuyama",
            Prefecture::Kochi => "Kochi",
            Prefecture::Fukuoka => "Fukuoka",
            Prefecture::Saga => "Saga",
            Prefecture::Nagasaki => "Nagasaki",
            Prefecture::Kumamoto => "Kumamoto",
            Prefecture::Oita => "Oita",
            Prefecture::Miyazaki => "Miyazaki",
            Prefecture::Kagoshima => "Kagoshima",
            Prefecture::Okinawa => "Naha",
        }
    }

    /// Romanized prefecture name, e.g. "Kanagawa".
    pub fn romaji(self) -> &'static str {
        match self {
            Prefecture::Hokkaido => "Hokkaido",
            Prefecture::Aomori => "Aomori",
            Prefecture::Iwate => "Iwate",
            Prefecture::Miyagi => "Miyagi",
            Prefecture::Akita => "Akita",
            Prefecture::Yamagata => "Yamagata",
            Prefecture::Fukushima => "Fukushima",
            Prefecture::Ibaraki => "Ibaraki",
            Prefecture::Tochigi => "Tochigi",
            Prefecture::Gunma => "Gunma",
            Prefecture::Saitama => "Saitama",
            Prefecture::Chiba => "Chiba",
            Prefecture::Tokyo => "Tokyo",
            Prefecture::Kanagawa => "Kanagawa",
            Prefecture::Niigata => "Niigata",
            Prefecture::Toyama => "Toyama",
            Prefecture::Ishikawa => "Ishikawa",
            Prefecture::Fukui => "Fukui",
            Prefecture::Yamanashi => "Yamanashi",
            Prefecture::Nagano => "Nagano",
            Prefecture::Gifu => "Gifu",
            Prefecture::Shizuoka => "Shizuoka",
            Prefecture::Aichi => "Aichi",
            Prefecture::Mie => "Mie",
            Prefecture::Shiga => "Shiga",
            Prefecture::Kyoto => "Kyoto",
            Prefecture::Osaka => "Osaka",
            Prefecture::Hyogo => "Hyogo",
            Prefecture::Nara => "Nara",
            Prefecture::Wakayama => "Wakayama",
            Prefecture::Tottori => "Tottori",
            Prefecture::Shimane => "Shimane",
            Prefecture::Okayama => "Okayama",
            Prefecture::Hiroshima => "Hiroshima",
            Prefecture::Yamaguchi => "Yamaguchi",
            Prefecture::Tokushima => "Tokushima",
            Prefecture::Kagawa => "Kagawa",
            Prefecture::Ehime => "Ehime",
            Prefecture::Kochi => "Kochi",
            Prefecture::Fukuoka => "Fukuoka",
            Prefecture::Saga => "Saga",
            Prefecture::Nagasaki => "Nagasaki",
            Prefecture::Kumamoto => "Kumamoto",
            Prefecture::Oita => "Oita",
            Prefecture::Miyazaki => "Miyazaki",
            Prefecture::Kagoshima => "Kagoshima",
            Prefecture::Okinawa => "Okinawa",
        }
    }

    /// JIS X 0401 prefecture code, 1 (Hokkaido) through 47 (Okinawa).
    pub fn code(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_code(code: u8) -> Option<Self> {
        let idx = usize::from(code).checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }

    /// Exact match on the Japanese name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }
}

impl fmt::Display for Prefecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Prefecture {
    type Err = anyhow::Error;

    /// Accepts the Japanese name, the romanized name (case-insensitive) or the
    /// JIS code ("13").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(code) = trimmed.parse::<u8>() {
            return Self::from_code(code)
                .ok_or_else(|| anyhow::anyhow!("Prefecture code must be 1-47, got {code}."));
        }

        Self::from_name(trimmed)
            .or_else(|| {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|p| p.romaji().eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| anyhow::anyhow!("Unknown prefecture '{s}'."))
    }
}

/// Map a prefecture name to the city queried at the provider.
///
/// Input outside the 47 Japanese names is returned unchanged, so free-form
/// city names still reach the provider as typed.
pub fn resolve_city(prefecture: &str) -> &str {
    match Prefecture::from_name(prefecture) {
        Some(p) => p.city(),
        None => prefecture,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: [(&str, &str); 47] = [
        ("北海道", "Sapporo"),
        ("青森県", "Aomori"),
        ("岩手県", "Morioka"),
        ("宮城県", "Sendai"),
        ("秋田県", "Akita"),
        ("山形県", "Yamagata"),
        ("福島県", "Fukushima"),
        ("茨城県", "Mito"),
        ("栃木県", "Utsunomiya"),
        ("群馬県", "Maebashi"),
        ("埼玉県", "Saitama"),
        ("千葉県", "Chiba"),
        ("東京都", "Tokyo"),
        ("神奈川県", "Yokohama"),
        ("新潟県", "Niigata"),
        ("富山県", "Toyama"),
        ("石川県", "Kanazawa"),
        ("福井県", "Fukui"),
        ("山梨県", "Kofu"),
        ("長野県", "Nagano"),
        ("岐阜県", "Gifu"),
        ("静岡県", "Shizuoka"),
        ("愛知県", "Nagoya"),
        ("三重県", "Tsu"),
        ("滋賀県", "Otsu"),
        ("京都府", "Kyoto"),
        ("大阪府", "Osaka"),
        ("兵庫県", "Kobe"),
        ("奈良県", "Nara"),
        ("和歌山県", "Wakayama"),
        ("鳥取県", "Tottori"),
        ("島根県", "Matsue"),
        ("岡山県", "Okayama"),
        ("広島県", "Hiroshima"),
        ("山口県", "Yamaguchi"),
        ("徳島県", "Tokushima"),
        ("香川県", "Takamatsu"),
        ("愛媛県", "Matsuyama"),
        ("高知県", "Kochi"),
        ("福岡県", "Fukuoka"),
        ("佐賀県", "Saga"),
        ("長崎県", "Nagasaki"),
        ("熊本県", "Kumamoto"),
        ("大分県", "Oita"),
        ("宮崎県", "Miyazaki"),
        ("鹿児島県", "Kagoshima"),
        ("沖縄県", "Naha"),
    ];

    #[test]
    fn resolves_every_prefecture_to_its_city() {
        for (name, city) in EXPECTED {
            assert_eq!(resolve_city(name), city, "wrong city for {name}");
        }
    }

    #[test]
    fn unknown_input_passes_through() {
        for input in ["", "Tokyo", "東京", "Springfield", "kanagawa", " 東京都"] {
            assert_eq!(resolve_city(input), input);
        }
    }

    #[test]
    fn all_is_in_jis_order() {
        for (i, p) in Prefecture::ALL.iter().enumerate() {
            assert_eq!(usize::from(p.code()), i + 1);
            assert_eq!(p.name(), EXPECTED[i].0);
        }
    }

    #[test]
    fn from_code_bounds() {
        assert_eq!(Prefecture::from_code(1), Some(Prefecture::Hokkaido));
        assert_eq!(Prefecture::from_code(13), Some(Prefecture::Tokyo));
        assert_eq!(Prefecture::from_code(47), Some(Prefecture::Okinawa));
        assert_eq!(Prefecture::from_code(0), None);
        assert_eq!(Prefecture::from_code(48), None);
    }

    #[test]
    fn parses_japanese_and_romaji() {
        assert_eq!("東京都".parse::<Prefecture>().unwrap(), Prefecture::Tokyo);
        assert_eq!("kanagawa".parse::<Prefecture>().unwrap(), Prefecture::Kanagawa);
        assert_eq!(" OKINAWA ".parse::<Prefecture>().unwrap(), Prefecture::Okinawa);
    }

    #[test]
    fn parses_jis_code() {
        assert_eq!("13".parse::<Prefecture>().unwrap(), Prefecture::Tokyo);
        assert_eq!("01".parse::<Prefecture>().unwrap(), Prefecture::Hokkaido);
        assert!("48".parse::<Prefecture>().is_err());
        assert!("0".parse::<Prefecture>().is_err());
    }

    #[test]
    fn parse_unknown_errors() {
        let err = "Atlantis".parse::<Prefecture>().unwrap_err();
        assert!(err.to_string().contains("Unknown prefecture"));
    }
}
