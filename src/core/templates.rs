//! Embedded module templates rendered with `{{placeholder}}` substitution.

use crate::core::declaration::{ActionDeclaration, AttributeDeclaration};
use crate::utils::template;

const CONTROLLER: &str = include_str!("templates/controller.tmpl");
const ACTION: &str = include_str!("templates/action.tmpl");
const MODEL: &str = include_str!("templates/model.tmpl");
const ATTRIBUTE: &str = include_str!("templates/attribute.tmpl");

/// Render a controller module: one block per action, substituted into the
/// controller shell.
pub fn controller(
    filename: &str,
    controller_name: &str,
    identity: &str,
    actions: &[ActionDeclaration],
) -> String {
    let blocks: String = actions
        .iter()
        .map(|action| {
            template::render(
                ACTION,
                &[
                    ("controllerName", controller_name),
                    ("actionName", action.name.as_str()),
                ],
            )
        })
        .collect();

    template::render(
        CONTROLLER,
        &[
            ("filename", filename),
            ("identity", identity),
            ("actions", blocks.as_str()),
        ],
    )
}

/// Render a model module: one block per attribute, substituted into the
/// model shell.
pub fn model(
    filename: &str,
    global_identity: &str,
    attributes: &[AttributeDeclaration],
) -> String {
    let blocks: String = attributes
        .iter()
        .map(|attribute| {
            template::render(
                ATTRIBUTE,
                &[
                    ("name", attribute.name.as_str()),
                    ("type", attribute.data_type.as_str()),
                ],
            )
        })
        .collect();

    template::render(
        MODEL,
        &[
            ("filename", filename),
            ("globalId", global_identity),
            ("attributes", blocks.as_str()),
        ],
    )
}
