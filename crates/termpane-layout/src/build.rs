// ABOUTME: Builds a pane tree from a declarative layout description.
// ABOUTME: Applies splits, shares identical styles, and resolves widgets by name.

use std::sync::Arc;

use termpane_core::{PaneSpec, Style};

use crate::{LayoutError, Pane, Widget};

/// Build a pane tree from `spec`.
///
/// `widgets` maps the widget name of each leaf to fresh content; returning
/// `None` fails the build with [`LayoutError::UnknownWidget`]. Panes without
/// a name are named after their parent (`main.1`, `main.2.1`, ...).
pub fn build<F>(spec: &PaneSpec, mut widgets: F) -> Result<Pane, LayoutError>
where
    F: FnMut(&str) -> Option<Box<dyn Widget>>,
{
    let mut root = Pane::new("main");
    let mut styles = Vec::new();
    apply(&mut root, spec, &mut widgets, &mut styles)?;
    tracing::debug!("Built layout with {} leaves", root.leaves().len());
    Ok(root)
}

fn apply<F>(
    pane: &mut Pane,
    spec: &PaneSpec,
    widgets: &mut F,
    styles: &mut Vec<Arc<Style>>,
) -> Result<(), LayoutError>
where
    F: FnMut(&str) -> Option<Box<dyn Widget>>,
{
    if let Some(name) = &spec.name {
        pane.set_name(name.clone());
    }
    if let Some(style) = &spec.style {
        pane.set_style(shared(styles, style.to_style()));
    }

    match &spec.split {
        Some(split) => {
            if spec.widget.is_some() {
                return Err(LayoutError::NotALeaf(pane.name().to_string()));
            }
            let (first, second) = pane.split(split.axis, split.value, split.unit)?;
            apply(first, &split.first, widgets, styles)?;
            apply(second, &split.second, widgets, styles)?;
        }
        None => {
            if let Some(widget_name) = &spec.widget {
                let widget = widgets(widget_name).ok_or_else(|| LayoutError::UnknownWidget {
                    pane: pane.name().to_string(),
                    widget: widget_name.clone(),
                })?;
                pane.set_boxed_widget(widget)?;
            }
        }
    }
    Ok(())
}

fn shared(styles: &mut Vec<Arc<Style>>, style: Style) -> Arc<Style> {
    if let Some(existing) = styles.iter().find(|s| ***s == style) {
        return Arc::clone(existing);
    }
    let style = Arc::new(style);
    styles.push(Arc::clone(&style));
    style
}
