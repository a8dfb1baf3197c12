//! The live page: an element tree plus the queries and mutations handlers use.

use crate::element::{find_ancestor, find_element, find_element_mut, walk, Element, ElementKind};
use crate::error::DomError;

/// Owns the element tree rooted at `body`.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Wrap a root element. The root is treated as the body.
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn body(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Result<&Element, DomError> {
        find_element(&self.root, id).ok_or_else(|| DomError::NotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        find_element_mut(&mut self.root, id).ok_or_else(|| DomError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        find_element(&self.root, id).is_some()
    }

    // =========================================================================
    // Text content
    // =========================================================================

    pub fn text_content(&self, id: &str) -> Result<&str, DomError> {
        self.get(id).map(|el| el.text.as_str())
    }

    pub fn set_text_content(&mut self, id: &str, text: impl Into<String>) -> Result<(), DomError> {
        self.get_mut(id)?.text = text.into();
        Ok(())
    }

    // =========================================================================
    // Input values
    // =========================================================================

    pub fn value(&self, id: &str) -> Result<&str, DomError> {
        let el = self.get(id)?;
        if !el.is_input() {
            return Err(DomError::NotAnInput(id.to_string()));
        }
        Ok(&el.value)
    }

    pub fn value_mut(&mut self, id: &str) -> Result<&mut String, DomError> {
        let el = self.get_mut(id)?;
        if !el.is_input() {
            return Err(DomError::NotAnInput(id.to_string()));
        }
        Ok(&mut el.value)
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> Result<(), DomError> {
        *self.value_mut(id)? = value.into();
        Ok(())
    }

    // =========================================================================
    // Class list
    // =========================================================================

    pub fn has_class(&self, id: &str, class: &str) -> Result<bool, DomError> {
        self.get(id).map(|el| el.has_class(class))
    }

    /// Toggle `class` on the element. Returns whether the class is now present.
    pub fn toggle_class(&mut self, id: &str, class: &str) -> Result<bool, DomError> {
        let el = self.get_mut(id)?;
        if el.classes.remove(class) {
            Ok(false)
        } else {
            el.classes.insert(class.to_string());
            Ok(true)
        }
    }

    // =========================================================================
    // Forms
    // =========================================================================

    /// Clear every input value inside the form.
    pub fn reset_form(&mut self, form_id: &str) -> Result<(), DomError> {
        let form = self.get_mut(form_id)?;
        if form.kind != ElementKind::Form {
            return Err(DomError::NotAForm(form_id.to_string()));
        }

        fn clear_inputs(el: &mut Element) {
            if el.is_input() {
                el.value.clear();
            }
            for child in &mut el.children {
                clear_inputs(child);
            }
        }

        clear_inputs(form);
        log::debug!("Form '{}' reset", form_id);
        Ok(())
    }

    /// The form enclosing `id`, if any.
    pub fn enclosing_form(&self, id: &str) -> Option<&Element> {
        find_ancestor(&self.root, id, |el| el.kind == ElementKind::Form)
    }

    /// Ids of all focusable elements in document order.
    pub fn focusable_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        walk(&self.root, &mut |el| {
            if el.focusable {
                ids.push(el.id.clone());
            }
        });
        ids
    }
}
