use crate::components::pico::{Button, ButtonType};
use crate::i18n::{t, use_lang, Lang, Text};
use crate::theme::use_dark_mode;
use dioxus::prelude::*;

/// Label of the toggle: it names the mode the click switches to.
pub fn toggle_label(lang: Lang, dark_mode: bool) -> &'static str {
    if dark_mode {
        t(lang, Text::SwitchToLightMode)
    } else {
        t(lang, Text::SwitchToDarkMode)
    }
}

#[component]
pub fn DarkModeSelector() -> Element {
    let mut dark_mode = use_dark_mode();
    let lang = use_lang();
    let label = toggle_label(lang(), dark_mode.get());

    rsx! {
        Button {
            button_type: ButtonType::Secondary,
            outline: true,
            on_click: move |_| dark_mode.toggle(),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::use_lang_provider;
    use crate::theme::{use_dark_mode_provider_with, MemoryStorage, DARK_MODE_STORAGE_KEY};
    use dioxus::dioxus_core::{ElementId, Event, Mutation};
    use dioxus_html::{
        set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
    };
    use std::any::Any;
    use std::rc::Rc;

    #[component]
    fn Harness(dark_mode: bool, lang: Lang) -> Element {
        use_dark_mode_provider_with(Rc::new(MemoryStorage::default()), Some(dark_mode), false);
        use_lang_provider(lang);
        rsx! {
            DarkModeSelector {}
        }
    }

    fn render(dark_mode: bool, lang: Lang) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { dark_mode, lang });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn offers_lightmode_when_dark() {
        let html = render(true, Lang::En);
        assert!(html.contains("Switch to lightmode"));
        assert!(!html.contains("Switch to darkmode"));
    }

    #[test]
    fn offers_darkmode_when_light() {
        let html = render(false, Lang::En);
        assert!(html.contains("Switch to darkmode"));
        assert!(!html.contains("Switch to lightmode"));
    }

    #[test]
    fn french_label() {
        assert!(render(false, Lang::Fr).contains("Passer au darkmode"));
        assert!(render(true, Lang::Fr).contains("Passer au lightmode"));
    }

    #[test]
    fn label_matches_mode_for_every_language() {
        for lang in [Lang::En, Lang::Fr] {
            assert_eq!(toggle_label(lang, true), t(lang, Text::SwitchToLightMode));
            assert_eq!(toggle_label(lang, false), t(lang, Text::SwitchToDarkMode));
        }
    }

    #[component]
    fn Persisted(storage: MemoryStorage) -> Element {
        use_dark_mode_provider_with(Rc::new(storage), None, false);
        use_lang_provider(Lang::En);
        rsx! {
            DarkModeSelector {}
        }
    }

    fn click(dom: &mut VirtualDom, target: ElementId) {
        let event = Event::new(
            Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
            true,
        );
        dom.runtime().handle_event("click", event, target);
        dom.render_immediate_to_vec();
    }

    #[test]
    fn clicking_flips_the_mode_and_persists_it() {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let storage = MemoryStorage::default();
        let mut dom = VirtualDom::new_with_props(
            Persisted,
            PersistedProps {
                storage: storage.clone(),
            },
        );

        let button = dom
            .rebuild_to_vec()
            .edits
            .into_iter()
            .find_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(id),
                _ => None,
            })
            .expect("toggle listens for clicks");

        assert!(dioxus_ssr::render(&dom).contains("Switch to darkmode"));
        assert_eq!(storage.get(DARK_MODE_STORAGE_KEY), None);

        click(&mut dom, button);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Switch to lightmode"));
        assert!(!html.contains("Switch to darkmode"));
        assert_eq!(storage.get(DARK_MODE_STORAGE_KEY).as_deref(), Some("true"));

        click(&mut dom, button);
        assert!(dioxus_ssr::render(&dom).contains("Switch to darkmode"));
        assert_eq!(storage.get(DARK_MODE_STORAGE_KEY).as_deref(), Some("false"));
    }
}
