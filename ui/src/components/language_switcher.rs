use crate::i18n;
use crate::t;
use dioxus::prelude::*;

/// Locale picker. Hidden when only one locale is embedded.
///
/// Selecting a locale reloads the Fluent bundles and, when the platform
/// provided a global `Signal<String>` language code, updates it so every
/// subscribed view re-renders with fresh strings.
#[component]
pub fn LanguageSwitcher() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    if langs().len() < 2 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                tracing::info!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(lang = %val, %err, "language switch failed"),
        }
    };

    rsx! {
        div { class: "language-switcher",
            label {
                class: "visually-hidden",
                r#for: "locale-select",
                {t!("language-switcher-label")}
            }
            select {
                id: "locale-select",
                class: "language-switcher__select",
                value: "{current_lang()}",
                oninput: on_change,
                for code in langs() {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}
