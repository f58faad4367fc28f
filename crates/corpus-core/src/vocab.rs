//! Authored noise vocabulary for vehicle ads.
//!
//! These lists are the defaults of [`StripperConfig`](crate::config::StripperConfig).
//! Entries are written as they appear in ads; the rule builder canonicalizes
//! them (zero-width non-joiner to space) before compiling.

/// Base color names. Each one is expanded with [`COLOR_SUFFIXES`].
pub const COLORS: &[&str] = &[
    "سفید",
    "مشکی",
    "قرمز",
    "آبی",
    "سبز",
    "زرد",
    "نارنجی",
    "بنفش",
    "صورتی",
    "قهوه‌ای",
    "خاکستری",
    "بژ",
    "آبی کبود",
    "نیلی",
    "آبی آسمانی",
    "آبی توسکا",
    "فیروزه‌ای",
    "نقره‌ای",
    "طلایی",
    "نوک مدادی",
    "نوکمدادی",
    "آلبالویی",
    "گوجه",
];

/// Suffixes appended to every color: detached and attached adjectival forms.
pub const COLOR_SUFFIXES: &[&str] = &[" ای", "ی", "ای"];

/// Provinces of Iran.
pub const REGIONS: &[&str] = &[
    "اردبیل",
    "آذربایجان غربی",
    "آذربایجان شرقی",
    "بوشهر",
    "چهار محال و بختیاری",
    "فارس",
    "گیلان",
    "گلستان",
    "همدان",
    "هرمزگان",
    "ایلام",
    "اصفهان",
    "کرمان",
    "کرمانشاه",
    "خوزستان",
    "کهگیلویه و بویراحمد",
    "کردستان",
    "لرستان",
    "مرکزی",
    "مازندران",
    "قزوین",
    "قم",
    "سیستان و بلوچستان",
    "تهران",
    "یزد",
];

/// Condition, feature and sales-jargon filler words.
pub const BOILERPLATE: &[&str] = &[
    "سند", "رنگ", "بیمه", "شرکتی", "تخفیف", "بدون", "دنده", "دست", "سوار", "تمیز", "تمام", "فول",
    "فنی", "دارد", "دارای", "داره", "دارن", "دارند", "دار", "بی", "آزاد", "ماشین", "کم", "کار",
    "شرایط", "ویژه", "موتور", "موتوری", "انژکتور", "انژکتوری", "در", "حد", "صفر", "صفرکیلومتر",
    "صفر کیلومتر", "کیلومتر", "لاکچری", "زیبا", "بسیار", "پلاک", "شده", "ملی", "گذر", "معاینه",
    "معاینه فنی", "پای", "موقت", "موقتی", "خشک", "تحویل", "روز", "مونتاژ", "آپشنال", "فروشی",
    "فروش", "جدید", "نو", "خودرو", "متفاوت", "وارداتی", "و", "همان", "لحظه", "گارانتی", "فعال",
    "خیلی", "سالم", "کاملا", "کارکرد", "رخ", "آپشن", "با", "لوازم", "بیرنگ", "بیضربه", "سواری",
    "کارشناسی", "اپشنال", "درحد", "هیدرولیک", "ABS", "درحدصفر", "آماده", "مشابه", "لولزم",
    "ساده", "هزارتا", "بدنه", "اتولاتدار", "همراه", "نمایندگی", "معمولی", "دیلایت", "تصادفی",
    "واقعی", "عمومی", "وسلامت", "باربند", "مسقف", "عروسک", "کلاسیک", "پرند", "شاسی",
    "باربندچادر", "شدگی", "پانوراما", "سرامیک", "سقف", "وسقف", "فلز", "برقی", "فرمان", "وفلز",
    "صفرسقف", "هاچبک", "اول", "حدصفر", "دنده‌ای", "دنده‌ ای", "برج", "دریچه", "سیمی", "نقدی",
    "گاز", "سوز", "روغن", "کارخانه", "انژکتر", "خوشگل", "بدونه", "فابریک", "وانژکتور", "پلمپ",
    "کمپانی", "فرمون", "ABSدار", "خطو", "خط", "خش", "ترمز", "ایینه", "وفنی", "کلکسیونی", "بشرط",
    "نقره", "متالیک", "کاربراتور", "تمیزسالم", "کامل", "بودن", "سرمه ای", "برگ", "یک", "خرجی",
    "هیچ", "انژکتورفنی", "سفارش", "آپکو", "زیاد", "خطوخش", "تصادف", "اولی", "سری", "وبدون",
    "خرج", "صفرنمایندگی", "امروز", "فقط", "مدیران", "درجا", "سرحال", "کروز", "کلاچ",
    "درکهریزک", "لکه", "به", "شهری", "نقطه", "ببمه", "ثالث", "یکسال", "خواب", "سال", "اسبی",
    "جلو", "عقب", "نیمه", "دوره", "خشگ", "باسیستم", "وتمیز", "شرط",
];

/// Spellings of the engine displacement unit.
pub const ENGINE_UNITS: &[&str] = &["cc", "CC", "سی سی", "سی‌سی", "سیسی", "سی‌ سی"];

/// Mileage and cylinder-count patterns (regular expressions).
pub const MILEAGE_PATTERNS: &[&str] = &[
    r"کارکرد\s*\d+",
    r"\d+\s*هزار\s*کیلومتر\s*کارکرد",
    r"\d+\s*هزار\s*کارکرد",
    r"\d+\s*هزار\s*کیلومتر",
    r"\d+\s*کیلومتر\s*کارکرد",
    r"\d+\s*کیلومتر",
    r"سیلندر\s*\d+",
];

/// The year keyword that precedes a model year.
pub const YEAR_KEYWORD: &str = "مدل";

/// Keywords marking a barter or trade listing.
pub const BARTER_KEYWORDS: &[&str] = &["تعویض", "معاوضه", "معامله", "معاوض"];

/// Keyword marking an installment (credit sale) ad.
pub const INSTALLMENT_KEYWORD: &str = "اقساط";

/// Collect a static list into owned strings.
pub fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}
