use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

const IN_PAGE_ANCHORS: &str = r##"a[href^="#"]"##;

/// Something that can look up fragment targets by id and scroll them into view.
pub trait FragmentTargets {
    type Target;

    fn find(&self, id: &str) -> Option<Self::Target>;
    fn scroll_smooth(&self, target: &Self::Target);
}

impl FragmentTargets for Document {
    type Target = Element;

    fn find(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }

    fn scroll_smooth(&self, target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// `#contact` -> `contact`. Bare `#` and anything that isn't a fragment give `None`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scrolls to the element named by `href`. Returns whether a scroll happened;
/// a missing target is not an error.
pub fn scroll_to_fragment<T: FragmentTargets>(targets: &T, href: &str) -> bool {
    let Some(id) = fragment_id(href) else {
        return false;
    };
    match targets.find(id) {
        Some(target) => {
            debug!("Smooth scrolling to #{}", id);
            targets.scroll_smooth(&target);
            true
        }
        None => false,
    }
}

/// What a click on an in-page anchor does once default navigation is suppressed:
/// scroll when the anchor has an `href` and there is a page to search, else nothing.
pub fn follow_anchor<T: FragmentTargets>(targets: Option<&T>, href: Option<&str>) -> bool {
    match (targets, href) {
        (Some(targets), Some(href)) => scroll_to_fragment(targets, href),
        _ => false,
    }
}

/// Click listeners on every in-page anchor, removed again when dropped.
pub struct AnchorScroll {
    anchors: Vec<Element>,
    listener: Closure<dyn FnMut(MouseEvent)>,
}

impl AnchorScroll {
    pub fn attach(document: &Document) -> Self {
        let listener = Closure::wrap(Box::new(move |e: MouseEvent| {
            e.prevent_default();
            let href = e
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|anchor| anchor.get_attribute("href"));
            let document = window().and_then(|w| w.document());
            follow_anchor(document.as_ref(), href.as_deref());
        }) as Box<dyn FnMut(MouseEvent)>);

        let anchors: Vec<Element> = match document.query_selector_all(IN_PAGE_ANCHORS) {
            Ok(list) => (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect(),
            Err(e) => {
                warn!("Could not query in-page anchors: {:?}", e);
                Vec::new()
            }
        };

        for anchor in &anchors {
            if let Err(e) = anchor.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref()) {
                warn!("Could not attach anchor listener: {:?}", e);
            }
        }
        debug!("Attached smooth scroll to {} anchors", anchors.len());

        Self { anchors, listener }
    }
}

impl Drop for AnchorScroll {
    fn drop(&mut self) {
        for anchor in &self.anchors {
            let _ = anchor.remove_event_listener_with_callback("click", self.listener.as_ref().unchecked_ref());
        }
    }
}
