//! Card family. Purely structural; no state.

styled_part! {
    Card {
        slot: "card",
        tag: "div",
        class: "rounded-xl border bg-card text-card-foreground shadow",
        pass_through: ["id", "role", "aria-labelledby"],
    }
}

styled_part! {
    CardHeader {
        slot: "card-header",
        tag: "div",
        class: "flex flex-col space-y-1.5 p-6",
        pass_through: [],
    }
}

styled_part! {
    CardTitle {
        slot: "card-title",
        tag: "h3",
        class: "font-semibold leading-none tracking-tight",
        pass_through: ["id"],
    }
}

styled_part! {
    CardDescription {
        slot: "card-description",
        tag: "p",
        class: "text-sm text-muted-foreground",
        pass_through: ["id"],
    }
}

styled_part! {
    CardContent {
        slot: "card-content",
        tag: "div",
        class: "p-6 pt-0",
        pass_through: [],
    }
}

styled_part! {
    CardFooter {
        slot: "card-footer",
        tag: "div",
        class: "flex items-center p-6 pt-0",
        pass_through: [],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernis_relief::render_to_string;

    #[test]
    fn test_card_family() {
        let card = Card::new()
            .class("w-96")
            .child(
                CardHeader::new()
                    .child(CardTitle::new().child("Plan"))
                    .child(CardDescription::new().child("Monthly")),
            )
            .child(CardContent::new().child("$9"))
            .child(CardFooter::new());
        insta::assert_snapshot!(
            render_to_string(&card.into_node()),
            @r#"<div data-slot="card" class="rounded-xl border bg-card text-card-foreground shadow w-96"><div data-slot="card-header" class="flex flex-col space-y-1.5 p-6"><h3 data-slot="card-title" class="font-semibold leading-none tracking-tight">Plan</h3><p data-slot="card-description" class="text-sm text-muted-foreground">Monthly</p></div><div data-slot="card-content" class="p-6 pt-0">$9</div><div data-slot="card-footer" class="flex items-center p-6 pt-0"></div></div>"#
        );
    }
}
