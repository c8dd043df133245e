//! VM Tree Component
//!
//! Collapsible tag tree. Folders start collapsed and the whole tree is
//! rebuilt (and so re-collapsed) whenever the VM listing changes.

use leptos::prelude::*;

use crate::context::use_session;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::tree::{build_tag_tree, folder_dom_id, tree_rows, TreeRow};

#[component]
pub fn VmTree() -> impl IntoView {
    let store = use_dashboard_store();
    let rows = Memo::new(move |_| store.vms().with(|vms| tree_rows(&build_tag_tree(vms))));

    view! {
        <nav id="vm-tree" class="vm-tree">
            {move || view! { <TreeList rows=rows.get() /> }}
        </nav>
    }
}

#[component]
fn TreeList(rows: Vec<TreeRow>) -> impl IntoView {
    view! {
        <ul>
            {rows.into_iter().map(|row| view! { <TreeRowView row=row /> }).collect_view()}
        </ul>
    }
}

/// One folder or leaf (recursive through `TreeList`)
#[component]
fn TreeRowView(row: TreeRow) -> AnyView {
    let session = use_session();
    let collapsed_by_default = row.initially_collapsed();

    match row {
        TreeRow::Leaf { label, vm_name } => view! {
            <li>
                <button class="vm-leaf" on:click=move |_| session.show_vm(vm_name.clone())>
                    {label}
                </button>
            </li>
        }
        .into_any(),
        TreeRow::Folder { id, label, children } => {
            let (collapsed, set_collapsed) = signal(collapsed_by_default);
            view! {
                <li>
                    <span class="folder" on:click=move |_| set_collapsed.update(|c| *c = !*c)>
                        <span class="toggle-icon">{move || if collapsed.get() { "▶" } else { "▼" }}</span>
                        " "
                        {label}
                    </span>
                    <div id=folder_dom_id(&id) class="folder-children" class:collapsed=move || collapsed.get()>
                        <TreeList rows=children />
                    </div>
                </li>
            }
            .into_any()
        }
    }
}
