use std::fmt;

use colored::Colorize;

use crate::token::TokenClaims;

/// Pages a view can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Index,
    Admin,
    User,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Index => "index.html",
            Page::Admin => "admin.html",
            Page::User => "user.html",
        }
    }

    /// Landing page after login, picked from the role claim.
    pub fn landing_for(claims: &TokenClaims) -> Page {
        if claims.is_admin() {
            Page::Admin
        } else {
            Page::User
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Areas of a page that views write into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Inline status line of the login form.
    Message,
    BookDetails,
    Recommendations,
}

pub trait Ui {
    /// Blocking notice shown to the user.
    fn alert(&mut self, message: &str);
    /// Replaces the region's content with plain text.
    fn set_text(&mut self, region: Region, text: &str);
    /// Replaces the region's content with an HTML fragment.
    fn set_html(&mut self, region: Region, html: &str);
    fn navigate(&mut self, page: Page);
}

/// Writes everything to the terminal.
#[derive(Debug, Default)]
pub struct TerminalUi;

impl Ui for TerminalUi {
    fn alert(&mut self, message: &str) {
        println!("{} {}", "!".yellow().bold(), message.yellow());
    }

    fn set_text(&mut self, region: Region, text: &str) {
        match region {
            Region::Message => println!("{}", text.red()),
            _ => println!("{text}"),
        }
    }

    fn set_html(&mut self, _region: Region, html: &str) {
        println!("{html}");
    }

    fn navigate(&mut self, page: Page) {
        println!("{} {}", "→".green().bold(), page.path().green());
    }
}
