//! Delete and inline edit handlers for server-rendered expense and income
//! records. Each record's state is owned by its own button closures.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};
use yew::{classes, AppHandle};

use crate::api::{ApiClient, Backend};
use crate::components::{mount_field, FieldKind, InlineField, InlineFieldProps};
use crate::config::TrackerConfig;
use crate::dom;
use crate::error::Result;
use crate::records::{plan_delete, EditClick, EditToggle, RecordDraft, RecordKind};

/// Blocking browser prompts and the page reload.
pub(crate) trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
    fn reload(&self);
}

struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        dom::confirm(message)
    }

    fn alert(&self, message: &str) {
        dom::alert(message)
    }

    fn reload(&self) {
        dom::reload()
    }
}

pub(crate) struct Context<B> {
    backend: Rc<B>,
    dialogs: Rc<dyn Dialogs>,
    currency_symbol: Rc<str>,
    reload: bool,
}

impl<B> Clone for Context<B> {
    fn clone(&self) -> Self {
        Context {
            backend: self.backend.clone(),
            dialogs: self.dialogs.clone(),
            currency_symbol: self.currency_symbol.clone(),
            reload: self.reload,
        }
    }
}

impl<B> Context<B> {
    fn refresh(&self) {
        if self.reload {
            self.dialogs.reload();
        }
    }
}

/// The record a button belongs to: its container and server id.
struct RecordRef {
    kind: RecordKind,
    id: String,
    container: Element,
}

impl RecordRef {
    fn locate(kind: RecordKind, button: &Element) -> Option<Self> {
        let container = button.closest(kind.markup().container).ok().flatten()?;
        let id = container
            .get_attribute("data-id")
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())?;
        Some(RecordRef {
            kind,
            id,
            container,
        })
    }
}

/// A record plus the two display cells the edit toggle swaps for inputs.
struct RecordNodes {
    record: RecordRef,
    title: Element,
    amount: Element,
}

impl RecordNodes {
    fn locate(kind: RecordKind, button: &Element) -> Option<Self> {
        let record = RecordRef::locate(kind, button)?;
        let markup = kind.markup();
        let details =
            dom::query(&record.container, markup.details).unwrap_or_else(|| record.container.clone());
        let title = dom::query(&details, markup.title)?;
        let amount = dom::query(&details, markup.amount)?;
        Some(RecordNodes {
            record,
            title,
            amount,
        })
    }
}

struct EditSession {
    nodes: RecordNodes,
    button: Element,
    toggle: EditToggle,
    fields: Option<(AppHandle<InlineField>, AppHandle<InlineField>)>,
}

impl EditSession {
    fn sync_label(&self) {
        self.button.set_text_content(Some(self.toggle.button_label()));
    }

    fn open(&mut self, currency_symbol: &str) -> Result<()> {
        let draft = RecordDraft::from_display(
            &dom::text(&self.nodes.title),
            &dom::text(&self.nodes.amount),
            currency_symbol,
        );
        let markup = self.nodes.record.kind.markup();
        let title = mount_field(
            &self.nodes.title,
            InlineFieldProps {
                kind: FieldKind::Description,
                value: draft.description.into(),
                class: classes!(markup.title_input_class),
            },
        )?;
        let amount = mount_field(
            &self.nodes.amount,
            InlineFieldProps {
                kind: FieldKind::Amount,
                value: draft.amount.into(),
                class: classes!(markup.amount_input_class),
            },
        )?;
        self.fields = Some((title, amount));
        self.toggle.opened();
        self.sync_label();
        Ok(())
    }

    fn read_draft(&self) -> Option<RecordDraft> {
        Some(RecordDraft {
            description: dom::input_value(&self.nodes.title)?,
            amount: dom::input_value(&self.nodes.amount)?,
        })
    }

    fn close(&mut self, draft: &RecordDraft, currency_symbol: &str) {
        if let Some((title, amount)) = self.fields.take() {
            title.destroy();
            amount.destroy();
        }
        self.nodes.title.set_text_content(Some(draft.description.as_str()));
        self.nodes
            .amount
            .set_text_content(Some(draft.display_amount(currency_symbol).as_str()));
        self.sync_label();
    }
}

/// Attaches delete and edit handlers to every record button under `root`.
pub fn attach(root: &Element, config: &TrackerConfig) {
    let ctx = Context {
        backend: Rc::new(ApiClient::new(config.api_base.clone())),
        dialogs: Rc::new(BrowserDialogs),
        currency_symbol: Rc::from(config.currency_symbol.as_str()),
        reload: config.reload_after_mutation,
    };
    attach_with(root, ctx);
}

pub(crate) fn attach_with<B: Backend + 'static>(root: &Element, ctx: Context<B>) {
    for kind in RecordKind::ALL {
        let markup = kind.markup();
        let mut attached = 0;
        for button in dom::query_all(root, markup.delete_button) {
            match attach_delete(kind, &button, ctx.clone()) {
                Ok(true) => attached += 1,
                Ok(false) => debug!("{:?} delete button outside a record, skipped", kind),
                Err(err) => warn!("could not attach {:?} delete handler: {}", kind, err),
            }
        }
        for button in dom::query_all(root, markup.edit_button) {
            match attach_edit(kind, &button, ctx.clone()) {
                Ok(true) => attached += 1,
                Ok(false) => debug!("{:?} edit button outside a record, skipped", kind),
                Err(err) => warn!("could not attach {:?} edit handler: {}", kind, err),
            }
        }
        debug!("{:?}: {} handlers attached", kind, attached);
    }
}

fn attach_delete<B: Backend + 'static>(
    kind: RecordKind,
    button: &Element,
    ctx: Context<B>,
) -> Result<bool> {
    let Some(record) = RecordRef::locate(kind, button) else {
        return Ok(false);
    };
    let record = Rc::new(record);

    let cb = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_event: MouseEvent| {
        let confirmed = ctx.dialogs.confirm(record.kind.delete_prompt());
        let Some(path) = plan_delete(record.kind, &record.id, confirmed) else {
            return;
        };
        let record = record.clone();
        let ctx = ctx.clone();
        spawn_local(async move {
            match ctx.backend.delete(&path).await {
                Ok(()) => {
                    info!("deleted {:?} {}", record.kind, record.id);
                    record.container.remove();
                    ctx.refresh();
                }
                Err(err) => {
                    warn!("delete {:?} {} failed: {}", record.kind, record.id, err);
                    ctx.dialogs.alert(record.kind.delete_failed());
                }
            }
        });
    }));
    button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(true)
}

fn attach_edit<B: Backend + 'static>(
    kind: RecordKind,
    button: &Element,
    ctx: Context<B>,
) -> Result<bool> {
    let Some(nodes) = RecordNodes::locate(kind, button) else {
        return Ok(false);
    };
    let session = Rc::new(RefCell::new(EditSession {
        nodes,
        button: button.clone(),
        toggle: EditToggle::default(),
        fields: None,
    }));

    let cb = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_event: MouseEvent| {
        let click = session.borrow().toggle.click();
        match click {
            EditClick::Open => {
                if let Err(err) = session.borrow_mut().open(&ctx.currency_symbol) {
                    warn!("could not open edit fields: {}", err);
                }
            }
            EditClick::Save => save(session.clone(), ctx.clone()),
            EditClick::Busy => debug!("save already in flight"),
        }
    }));
    button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(true)
}

fn save<B: Backend + 'static>(session: Rc<RefCell<EditSession>>, ctx: Context<B>) {
    let (kind, id, draft) = {
        let mut s = session.borrow_mut();
        let Some(draft) = s.read_draft() else {
            warn!("{:?} {}: edit inputs missing", s.nodes.record.kind, s.nodes.record.id);
            return;
        };
        if !s.toggle.save_started() {
            return;
        }
        (s.nodes.record.kind, s.nodes.record.id.clone(), draft)
    };

    spawn_local(async move {
        let outcome = ctx.backend.update(kind, &id, &draft).await;
        let mut s = session.borrow_mut();
        match outcome {
            Ok(()) => {
                info!("updated {:?} {}", kind, id);
                s.toggle.save_finished(true);
                s.close(&draft, &ctx.currency_symbol);
                drop(s);
                ctx.refresh();
            }
            Err(err) => {
                warn!("update {:?} {} failed: {}", kind, id, err);
                s.toggle.save_finished(false);
                drop(s);
                ctx.dialogs.alert(kind.update_failed());
            }
        }
    });
}
