//! Form label.

styled_part! {
    Label {
        slot: "label",
        tag: "label",
        class: "text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70",
        pass_through: ["for", "id", "form"],
    }
}
