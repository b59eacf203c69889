// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================
// Tabla estática EN/AR indexada por clave. Una clave ausente (o una
// traducción vacía) devuelve la clave tal cual: nunca es un error.
// ============================================================================

use std::collections::HashMap;
use std::fmt::Display;
use std::rc::Rc;

use crate::models::Language;

/// Traducciones de una clave
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Translation {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Translation {
    fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct TranslationTable {
    entries: HashMap<&'static str, Translation>,
}

const BUILTIN_ENTRIES: &[(&str, &str, &str)] = &[
    // Header / navegación
    ("aiTouch", "AI Touch", "لمسة الذكاء"),
    ("home", "Home", "الرئيسية"),
    ("designStudio", "Design Studio", "استوديو التصميم"),
    ("subscriptions", "Subscriptions", "الاشتراكات"),
    ("profile", "Profile", "الملف الشخصي"),
    ("dashboard", "Dashboard", "لوحة التحكم"),
    ("login", "Login", "تسجيل الدخول"),
    ("logout", "Logout", "تسجيل الخروج"),
    ("signUp", "Sign Up", "إنشاء حساب"),
    ("welcome", "Welcome, {0}", "مرحباً، {0}"),
    ("toggleTheme", "Toggle theme", "تبديل المظهر"),
    // Home
    ("heroTitle", "Transform your photos with AI", "حوّل صورك بالذكاء الاصطناعي"),
    ("heroSubtitle", "Upload an image and describe the change you want.", "ارفع صورة وصف التعديل الذي تريده."),
    ("startDesigning", "Start designing", "ابدأ التصميم"),
    ("galleryTitle", "Before & after", "قبل وبعد"),
    ("galleryEmpty", "The gallery is empty for now.", "المعرض فارغ حالياً."),
    ("before", "Before", "قبل"),
    ("after", "After", "بعد"),
    // Auth
    ("email", "Email", "البريد الإلكتروني"),
    ("password", "Password", "كلمة المرور"),
    ("name", "Name", "الاسم"),
    ("country", "Country", "الدولة"),
    ("noAccount", "Don't have an account?", "ليس لديك حساب؟"),
    ("haveAccount", "Already have an account?", "لديك حساب بالفعل؟"),
    ("loginFailed", "Login failed: {0}", "فشل تسجيل الدخول: {0}"),
    ("signUpFailed", "Sign up failed: {0}", "فشل إنشاء الحساب: {0}"),
    ("fillAllFields", "Please fill in all fields", "يرجى ملء جميع الحقول"),
    // Studio / perfil
    ("imageCredits", "{0} image credits left", "متبقي {0} رصيد صور"),
    ("promptPlaceholder", "Describe the change you want...", "صف التعديل الذي تريده..."),
    ("generate", "Generate", "إنشاء"),
    ("noCredits", "You have no image credits left", "لم يتبقَ لديك رصيد صور"),
    ("memberSince", "Member since {0}", "عضو منذ {0}"),
    ("availablePackages", "Available packages", "الباقات المتاحة"),
    ("packageDetails", "{0} images for ${1}", "{0} صورة مقابل ${1}"),
    ("editName", "Edit name", "تعديل الاسم"),
    ("save", "Save", "حفظ"),
    ("adminPanel", "Admin panel", "لوحة الإدارة"),
    ("galleryCount", "{0} images in the public gallery", "{0} صورة في المعرض العام"),
    ("allRightsReserved", "All rights reserved.", "جميع الحقوق محفوظة."),
    ("loading", "Loading...", "جارٍ التحميل..."),
];

thread_local! {
    static BUILTIN: Rc<TranslationTable> = Rc::new(TranslationTable::from_entries(BUILTIN_ENTRIES));
}

impl TranslationTable {
    pub fn from_entries(entries: &[(&'static str, &'static str, &'static str)]) -> Self {
        let entries = entries
            .iter()
            .map(|&(key, en, ar)| (key, Translation { en, ar }))
            .collect();
        Self { entries }
    }

    /// Tabla compilada en el binario (compartida por hilo)
    pub fn builtin() -> Rc<Self> {
        BUILTIN.with(Rc::clone)
    }

    pub fn lookup(&self, key: &str, language: Language) -> Option<&'static str> {
        self.entries
            .get(key)
            .map(|t| t.get(language))
            .filter(|text| !text.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sustituye `{i}` por `args[i]`, en orden, solo la primera aparición de cada uno
pub fn substitute(template: &str, args: &[&dyn Display]) -> String {
    let mut text = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        let placeholder = format!("{{{}}}", index);
        text = text.replacen(&placeholder, &arg.to_string(), 1);
    }
    text
}

/// Función de traducción
///
/// Devuelve la traducción con los argumentos sustituidos, o la clave si no
/// hay traducción para el idioma.
pub fn t(table: &TranslationTable, key: &str, language: Language, args: &[&dyn Display]) -> String {
    let template = table.lookup(key, language).unwrap_or(key);
    substitute(template, args)
}
