use std::collections::HashSet;

use serde_json::json;
use strum::IntoEnumIterator;

use crate::workpad::{Asset, AssetMap, DATAURL_ASSET_KIND, Element, Position, Workpad};

use super::*;

fn one_of_each() -> Vec<Action> {
    let page_id = "page-1".to_string();
    let element_id = "element-1".to_string();
    vec![
        Action::SetWorkpad(Workpad::new("report")),
        Action::SetName("name".into()),
        Action::SetWorkpadCss(".canvasPage {}".into()),
        Action::SetColors(vec!["#fff".into()]),
        Action::AddColor("#000".into()),
        Action::RemoveColor("#000".into()),
        Action::SizeWorkpad {
            width: 100,
            height: 100,
        },
        Action::SetWriteable(false),
        Action::AddPage,
        Action::DuplicatePage(page_id.clone()),
        Action::RemovePage(page_id.clone()),
        Action::MovePage {
            page_id: page_id.clone(),
            position: -1,
        },
        Action::GotoPage(1),
        Action::SetPageStyle {
            page_id: page_id.clone(),
            style: Default::default(),
        },
        Action::SetPageTransition {
            page_id: page_id.clone(),
            transition: Some("fade".into()),
        },
        Action::AddElement {
            page_id: page_id.clone(),
            element: Element::new("shape", Position::default()),
        },
        Action::DuplicateElement {
            page_id: page_id.clone(),
            element_id: element_id.clone(),
        },
        Action::RemoveElements {
            page_id: page_id.clone(),
            element_ids: vec![element_id.clone()],
        },
        Action::SetPosition {
            page_id: page_id.clone(),
            element_id: element_id.clone(),
            position: Position::default(),
        },
        Action::SetExpression {
            page_id: page_id.clone(),
            element_id: element_id.clone(),
            expression: "markdown".into(),
        },
        Action::SetFilter {
            page_id,
            element_id: element_id.clone(),
            filter: None,
        },
        Action::SetAssets(AssetMap::new()),
        Action::ResetAssets,
        Action::SetAsset(Asset::new(DATAURL_ASSET_KIND, "data:")),
        Action::SetAssetValue {
            id: "asset-1".into(),
            value: "data:".into(),
        },
        Action::RemoveAsset("asset-1".into()),
        Action::SelectElement(Some(element_id.clone())),
        Action::SetZoomScale(1.5),
        Action::SetFullscreen(true),
        Action::SetEditing(true),
        Action::SetRefreshInterval(5000),
        Action::SetLoading {
            element_id: element_id.clone(),
        },
        Action::SetValue {
            element_id: element_id.clone(),
            value: json!({ "type": "render" }),
        },
        Action::SetError {
            element_id: element_id.clone(),
            error: "boom".into(),
        },
        Action::ClearValue { element_id },
        Action::PruneResolvedArgs,
    ]
}

#[test]
fn test_every_action_type_has_a_sample() {
    let sampled: HashSet<ActionType> =
        one_of_each().iter().map(|a| a.action_type()).collect();
    let all: HashSet<ActionType> = ActionType::iter().collect();
    assert_eq!(sampled, all);
}

#[test]
fn test_type_tag_matches_serialized_type() {
    for action in one_of_each() {
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], json!(action.type_tag()));
    }
}

#[test]
fn test_actions_deserialize_from_redux_shape() {
    let action: Action = serde_json::from_value(json!({
        "type": "SET_EXPRESSION",
        "payload": {
            "pageId": "page-1",
            "elementId": "element-1",
            "expression": "markdown \"hello\""
        }
    }))
    .unwrap();

    assert_eq!(
        action,
        Action::SetExpression {
            page_id: "page-1".into(),
            element_id: "element-1".into(),
            expression: "markdown \"hello\"".into(),
        }
    );

    let action: Action =
        serde_json::from_value(json!({ "type": "RESET_ASSETS" })).unwrap();
    assert_eq!(action, Action::ResetAssets);
}

#[test]
fn test_type_tags() {
    assert_eq!(ActionType::SetWorkpad.as_str(), "SET_WORKPAD");
    assert_eq!(ActionType::SetWorkpadCss.as_str(), "SET_WORKPAD_CSS");
    assert_eq!(ActionType::PruneResolvedArgs.to_string(), "PRUNE_RESOLVED_ARGS");
}

#[test]
fn test_transient_and_resolved_args_never_affect_persistence() {
    for action_type in ActionType::iter() {
        match action_type.family() {
            ActionFamily::Transient | ActionFamily::ResolvedArgs => {
                assert!(!action_type.affects_persistence(), "{action_type}")
            }
            _ => {}
        }
    }
}

#[test]
fn test_loading_actions_do_not_affect_persistence() {
    assert!(!ActionType::SetWorkpad.affects_persistence());
    assert!(!ActionType::SetAssets.affects_persistence());
    assert!(!ActionType::ResetAssets.affects_persistence());
    assert!(ActionType::SetAsset.affects_persistence());
    assert!(ActionType::SetName.affects_persistence());
    assert!(ActionType::SetExpression.affects_persistence());
}
