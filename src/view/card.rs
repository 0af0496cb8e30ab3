//! Connector card presenter
//!
//! Decides how one reconciled connector is shown and which actions it offers.
//! Actions never touch state directly; they produce [`CardCommand`]s for the
//! owner of the connector store to apply.

use crate::connector::ConnectorRecord;
use crate::consts::cli_consts::FALLBACK_CONNECTOR_LOGO;
use crate::notifications::NotificationKind;
use crate::routes::SessionRoutes;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum CardAction {
    Share,
    Pin,
    Unpin,
    Remove,
}

/// A request for the store owner, produced by triggering a card action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardCommand {
    TogglePin(ConnectorRecord),
    RemoveCustomConnector(ConnectorRecord),
    CopyToClipboard(String),
    Notify(NotificationKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    Fallback(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCard {
    pub record: ConnectorRecord,
    pub pinned: bool,
    /// Where opening the card leads, if anywhere.
    pub navigation: Option<String>,
    /// Available actions, in display order.
    pub actions: Vec<CardAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardView {
    /// Metadata is still loading; draw placeholders only.
    Skeleton { id: String },
    Loaded(LoadedCard),
    /// Loaded, but the logo could not be shown.
    Fallback(LoadedCard),
}

/// Builds the view for one connector.
pub fn present(entry: &ConnectorRecord, is_pinned: bool, routes: &SessionRoutes) -> CardView {
    if entry.is_loading() {
        return CardView::Skeleton {
            id: entry.id().to_string(),
        };
    }

    let navigation = if entry.is_disabled() {
        None
    } else {
        entry.connect_url().map(|url| routes.open_link(url))
    };

    let mut actions = Vec::new();
    if !entry.is_disabled() {
        if navigation.is_some() {
            actions.push(CardAction::Share);
        }
        if entry.is_custom() {
            actions.push(CardAction::Remove);
        } else if is_pinned {
            actions.push(CardAction::Unpin);
        } else {
            actions.push(CardAction::Pin);
        }
    }

    let card = LoadedCard {
        record: entry.clone(),
        pinned: is_pinned,
        navigation,
        actions,
    };
    match entry.image() {
        Some(_) => CardView::Loaded(card),
        None => CardView::Fallback(card),
    }
}

/// Whether the rendering surface can load `url` as a logo.
pub fn image_loadable(url: &str) -> bool {
    let url = url.trim();
    ["https://", "http://", "data:image/"]
        .iter()
        .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme))
}

impl CardView {
    /// Records a failed logo load. Falling back is one-way.
    pub fn image_failed(self) -> Self {
        match self {
            CardView::Loaded(card) => CardView::Fallback(card),
            other => other,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            CardView::Skeleton { id } => id,
            CardView::Loaded(card) | CardView::Fallback(card) => card.record.id(),
        }
    }

    pub fn card(&self) -> Option<&LoadedCard> {
        match self {
            CardView::Skeleton { .. } => None,
            CardView::Loaded(card) | CardView::Fallback(card) => Some(card),
        }
    }

    pub fn image(&self) -> Option<ImageSource> {
        match self {
            CardView::Skeleton { .. } => None,
            CardView::Loaded(card) => card
                .record
                .image()
                .map(|url| ImageSource::Remote(url.to_string())),
            CardView::Fallback(_) => Some(ImageSource::Fallback(FALLBACK_CONNECTOR_LOGO)),
        }
    }

    pub fn actions(&self) -> &[CardAction] {
        self.card().map(|card| card.actions.as_slice()).unwrap_or(&[])
    }

    pub fn navigation(&self) -> Option<&str> {
        self.card().and_then(|card| card.navigation.as_deref())
    }
}

impl LoadedCard {
    /// Commands for `action`, or `None` when the card does not offer it.
    pub fn trigger(&self, action: CardAction, routes: &SessionRoutes) -> Option<Vec<CardCommand>> {
        if !self.actions.contains(&action) {
            return None;
        }
        let commands = match action {
            CardAction::Share => {
                let url = self.record.connect_url()?;
                vec![
                    CardCommand::CopyToClipboard(routes.share_link(url)),
                    CardCommand::Notify(NotificationKind::ShareUrlCopied),
                ]
            }
            CardAction::Pin | CardAction::Unpin => {
                vec![CardCommand::TogglePin(self.record.clone())]
            }
            CardAction::Remove => vec![CardCommand::RemoveCustomConnector(self.record.clone())],
        };
        Some(commands)
    }

    /// Name shown on the card, never blank.
    pub fn title(&self) -> &str {
        match self.record.display_name() {
            "" => "Safe App",
            name => name,
        }
    }

    pub fn logo_alt(&self) -> String {
        format!("{} Logo", self.title())
    }

    pub fn open_label(&self) -> String {
        format!("open {} Safe App", self.title())
    }

    pub fn action_label(&self, action: CardAction) -> String {
        let name = self.title();
        match action {
            CardAction::Share => format!("copy {} Safe App share link to clipboard", name),
            CardAction::Pin => format!("Pin {} Safe App", name),
            CardAction::Unpin => format!("Unpin {} Safe App", name),
            CardAction::Remove => format!("Remove {} custom Safe App", name),
        }
    }
}
