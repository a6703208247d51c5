use super::*;

impl App {
    /// Make `page` the only visible page.
    pub fn show_page(&mut self, page: Page) {
        self.current_page = page;
        self.clear_status();
    }

    /// Move keyboard focus from the search box to the cards.
    pub fn focus_cards(&mut self) {
        if self.listing.is_empty() {
            return;
        }
        self.list_focus = ListFocus::Cards;
        if self.selected_index.is_none() {
            self.selected_index = Some(0);
        }
    }

    pub fn focus_search(&mut self) {
        self.list_focus = ListFocus::Search;
    }

    pub fn select_next(&mut self) {
        if self.listing.is_empty() {
            return;
        }
        let last = self.listing.len() - 1;
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(last),
            None => 0,
        });
    }

    /// Move up; from the first card focus returns to the search box.
    pub fn select_previous(&mut self) {
        match self.selected_index {
            Some(0) | None => self.focus_search(),
            Some(idx) => self.selected_index = Some(idx - 1),
        }
    }

    /// Keep the selected card inside the visible window of `capacity` cards.
    pub fn clamp_list_scroll(&mut self, capacity: usize) {
        let total = self.listing.len();
        if capacity == 0 || total <= capacity {
            self.list_scroll = 0;
            return;
        }
        if let Some(selected) = self.selected_index {
            if selected >= self.list_scroll + capacity {
                self.list_scroll = selected + 1 - capacity;
            }
            if selected < self.list_scroll {
                self.list_scroll = selected;
            }
        }
        self.list_scroll = self.list_scroll.min(total - capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(n: i64) -> App {
        let entries: Vec<Entry> = (1..=n)
            .map(|id| Entry {
                id,
                title: format!("entry {id}"),
                content: String::new(),
                tags: Vec::new(),
            })
            .collect();
        let mut app = App::new("memory");
        app.show_listing(&entries, "");
        app
    }

    #[test]
    fn test_show_page_switches_and_clears_status() {
        let mut app = app_with(0);
        app.set_status("hello");
        app.show_page(Page::AddNew);
        assert_eq!(app.current_page, Page::AddNew);
        assert!(app.status_message.is_none());
        app.show_page(Page::List);
        assert_eq!(app.current_page, Page::List);
    }

    #[test]
    fn test_focus_cards_selects_first() {
        let mut app = app_with(3);
        app.focus_cards();
        assert_eq!(app.list_focus, ListFocus::Cards);
        assert_eq!(app.selected_index, Some(0));
    }

    #[test]
    fn test_focus_cards_ignored_on_empty_list() {
        let mut app = app_with(0);
        app.focus_cards();
        assert_eq!(app.list_focus, ListFocus::Search);
    }

    #[test]
    fn test_select_next_stops_at_last() {
        let mut app = app_with(2);
        app.focus_cards();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected_index, Some(1));
    }

    #[test]
    fn test_select_previous_from_top_returns_to_search() {
        let mut app = app_with(2);
        app.focus_cards();
        app.select_previous();
        assert_eq!(app.list_focus, ListFocus::Search);
    }

    #[test]
    fn test_scroll_follows_selection() {
        let mut app = app_with(10);
        app.focus_cards();
        app.selected_index = Some(7);
        app.clamp_list_scroll(3);
        assert_eq!(app.list_scroll, 5);
        app.selected_index = Some(2);
        app.clamp_list_scroll(3);
        assert_eq!(app.list_scroll, 2);
        app.clamp_list_scroll(20);
        assert_eq!(app.list_scroll, 0);
    }
}
