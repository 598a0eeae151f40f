//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Mobile number patterns, one per locale. The first match names the locale.
const MOBILE_PATTERNS: &[(&str, &str)] = &[
    ("id-ID", r"^(\+?62|0)8(1[1-9]|2[1238]|3[1238]|5[1235-9]|7[78]|9[5-9]|8[1-9])[\s\d]{5,11}$"),
    ("ms-MY", r"^(\+?60|0)1(([0145](-|\s)?\d{7,8})|([236-9](-|\s)?\d{7}))$"),
    ("en-SG", r"^(\+65)?[3689]\d{7}$"),
    ("en-PH", r"^(09|\+639)\d{9}$"),
    ("en-IN", r"^(\+?91|0)?[6789]\d{9}$"),
    ("en-AU", r"^(\+?61|0)4\d{8}$"),
    ("en-GB", r"^(\+?44|0)7\d{9}$"),
    ("en-US", r"^((\+1|1)?( |-)?)?(\([2-9][0-9]{2}\)|[2-9][0-9]{2})( |-)?([2-9][0-9]{2}( |-)?[0-9]{4})$"),
    ("de-DE", r"^((\+49|0)1)(5[0-25-9]\d|6([23]|0\d?)|7([0-57-9]|6\d))\d{7,9}$"),
    ("fr-FR", r"^(\+?33|0)[67]\d{8}$"),
    ("ja-JP", r"^(\+81[ \-]?(\(0\))?|0)[6789]0[ \-]?\d{4}[ \-]?\d{4}$"),
    ("am-AM", r"^(\+?374|0)(33|4[134]|55|77|88|9[13-689])\d{6}$"),
    ("ar-AE", r"^((\+?971)|0)?5[024568]\d{7}$"),
    ("ar-BH", r"^(\+?973)?(3|6)\d{7}$"),
    ("ar-DZ", r"^(\+?213|0)(5|6|7)\d{8}$"),
    ("ar-EG", r"^((\+?20)|0)?1[0125]\d{8}$"),
    ("ar-IQ", r"^(\+?964|0)?7[0-9]\d{8}$"),
    ("ar-JO", r"^(\+?962|0)?7[789]\d{7}$"),
    ("ar-KW", r"^(\+?965)([569]\d{7}|41\d{6})$"),
    ("ar-MA", r"^(?:(?:\+|00)212|0)[5-7]\d{8}$"),
    ("ar-SA", r"^((\+?966)|0)?5\d{8}$"),
    ("ar-TN", r"^(\+?216)?[2459]\d{7}$"),
    ("bg-BG", r"^(\+?359|0)?8[789]\d{7}$"),
    ("bn-BD", r"^(\+?880|0)1[13456789][0-9]{8}$"),
    ("cs-CZ", r"^(\+?420)? ?[1-9][0-9]{2} ?[0-9]{3} ?[0-9]{3}$"),
    ("da-DK", r"^(\+?45)?\s?\d{2}\s?\d{2}\s?\d{2}\s?\d{2}$"),
    ("de-AT", r"^(\+43|0)\d{1,4}\d{3,12}$"),
    ("el-GR", r"^(\+?30|0)?6(8[5-9]|9[013-57-9])\d{7}$"),
    ("en-GH", r"^(\+233|0)(20|50|24|54|27|57|26|56|23|28|55|59)\d{7}$"),
    ("en-HK", r"^(\+?852[-\s]?)?[456789]\d{3}[-\s]?\d{4}$"),
    ("en-IE", r"^(\+?353|0)8[356789]\d{7}$"),
    ("en-KE", r"^(\+?254|0)(7|1)\d{8}$"),
    ("en-NG", r"^(\+?234|0)?[789]\d{9}$"),
    ("en-NZ", r"^(\+?64|0)[28]\d{7,9}$"),
    ("en-PK", r"^((00|\+)?92|0)3[0-6]\d{8}$"),
    ("en-UG", r"^(\+?256|0)?7\d{8}$"),
    ("en-ZA", r"^(\+?27|0)\d{9}$"),
    ("es-AR", r"^\+?549(11|[2368]\d)\d{8}$"),
    ("es-CL", r"^(\+?56|0)[2-9]\d{8}$"),
    ("es-CO", r"^(\+?57)?3(0(0|1|2|4|5)|1\d|2[0-4]|5(0|1))\d{7}$"),
    ("es-ES", r"^(\+?34)?[67]\d{8}$"),
    ("es-MX", r"^(\+?52)?(1|01)?\d{10,11}$"),
    ("es-PE", r"^(\+?51)?9\d{8}$"),
    ("fa-IR", r"^(\+?98[-\s]?|0)9[0-39]\d[-\s]?\d{3}[-\s]?\d{4}$"),
    ("fi-FI", r"^(\+?358|0)\s?(4(0|1|2|4|5|6)?|50)\s?(\d\s?){4,8}\d$"),
    ("he-IL", r"^(\+972|0)([23489]|5[012345689]|77)[1-9]\d{6}$"),
    ("hu-HU", r"^(\+?36|06)(20|30|31|50|70)\d{7}$"),
    ("it-IT", r"^(\+?39)?\s?3\d{2} ?\d{6,7}$"),
    ("ko-KR", r"^((\+?82)[ \-]?)?0?1[016789][ \-]?\d{3,4}[ \-]?\d{4}$"),
    ("nb-NO", r"^(\+?47)?[49]\d{7}$"),
    ("nl-NL", r"^(((\+|00)?31\(0\))|((\+|00)?31)|0)6\d{8}$"),
    ("pl-PL", r"^(\+?48)? ?[5-8]\d ?\d{3} ?\d{2} ?\d{2}$"),
    ("pt-BR", r"^((\+?55 ?[1-9]{2} ?)|(\+?55 ?\([1-9]{2}\) ?)|(0[1-9]{2} ?)|(\([1-9]{2}\) ?)|([1-9]{2} ?))((\d{4}-?\d{4})|(9[2-9]\d{3}-?\d{4}))$"),
    ("pt-PT", r"^(\+?351)?9[1236]\d{7}$"),
    ("ro-RO", r"^(\+?4?0)\s?7\d{2}[/\s.-]?\d{3}[\s.-]?\d{3}$"),
    ("ru-RU", r"^(\+?7|8)?9\d{9}$"),
    ("sk-SK", r"^(\+?421)? ?[1-9][0-9]{2} ?[0-9]{3} ?[0-9]{3}$"),
    ("sr-RS", r"^(\+3816|06)[- \d]{5,9}$"),
    ("sv-SE", r"^(\+?46|0)[\s-]?7[\s-]?[02369]([\s-]?\d){7}$"),
    ("th-TH", r"^(\+66|66|0)\d{9}$"),
    ("tr-TR", r"^(\+?90|0)?5\d{9}$"),
    ("uk-UA", r"^(\+?38|8)?0\d{9}$"),
    ("vi-VN", r"^((\+?84)|0)((3[2-9])|(5[25689])|(7[06-9])|(8[1-9])|(9[0-9]))\d{7}$"),
    ("zh-CN", r"^((\+|00)86)?(1[3-9]|9[28])\d{9}$"),
    ("zh-TW", r"^(\+?886-?|0)?9\d{8}$"),
];

static MOBILE_RES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    MOBILE_PATTERNS
        .iter()
        .map(|(locale, pattern)| {
            let re = Regex::new(pattern).expect("Failed to compile mobile number regex");
            (*locale, re)
        })
        .collect()
});

/// A type-safe wrapper for mobile phone numbers.
///
/// A number is accepted when it matches the mobile format of at least one
/// known locale.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("08123456789").unwrap();
/// assert_eq!(phone.locale(), Some("id-ID"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating it as a mobile number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if no locale pattern matches.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if Self::match_locale(&phone).is_none() {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    fn match_locale(phone: &str) -> Option<&'static str> {
        MOBILE_RES
            .iter()
            .find(|(_, re)| re.is_match(phone))
            .map(|(locale, _)| *locale)
    }

    /// The first locale whose mobile format this number matches.
    pub fn locale(&self) -> Option<&'static str> {
        Self::match_locale(&self.0)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
