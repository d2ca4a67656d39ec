/// Views reachable once signed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Points,
    Market,
    Rewards,
    Profile,
    Guide,
    Schedule,
    Tracking,
}

impl View {
    /// Bottom navigation slots, keyed `1`..`5`
    pub const NAV_BAR: [View; 5] = [
        View::Home,
        View::Points,
        View::Schedule,
        View::Rewards,
        View::Profile,
    ];

    /// Full-screen views hide the bottom navigation bar
    pub fn is_full_screen(&self) -> bool {
        matches!(self, Self::Schedule | Self::Tracking)
    }

    /// Translation key for the view's title
    pub fn title_key(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Points => "collectionPoints",
            Self::Market => "sellEwaste",
            Self::Rewards => "rewards",
            Self::Profile => "profile",
            Self::Guide => "guide",
            Self::Schedule => "schedulePickup",
            Self::Tracking => "liveTracking",
        }
    }

    /// Translation key shown under the view's bottom-bar slot
    pub fn nav_label_key(&self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Schedule => "schedulePickup",
            other => other.title_key(),
        }
    }

    pub fn from_nav_digit(digit: char) -> Option<View> {
        let index = digit.to_digit(10)?.checked_sub(1)? as usize;
        Self::NAV_BAR.get(index).copied()
    }

    /// Target of the `g` jump sequence, e.g. `g` `m` for the market
    pub fn from_jump_key(key: char) -> Option<View> {
        match key {
            'h' => Some(Self::Home),
            'p' => Some(Self::Points),
            'm' => Some(Self::Market),
            'r' => Some(Self::Rewards),
            'u' => Some(Self::Profile),
            'f' => Some(Self::Guide),
            's' => Some(Self::Schedule),
            _ => None,
        }
    }
}

/// What fills the terminal, derived from the session flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevel {
    Onboarding,
    Auth,
    Main(View),
}

impl TopLevel {
    pub fn resolve(has_onboarded: bool, is_authenticated: bool, view: View) -> Self {
        if !has_onboarded {
            Self::Onboarding
        } else if !is_authenticated {
            Self::Auth
        } else {
            Self::Main(view)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{t, Lang};

    #[test]
    fn onboarding_wins_over_everything() {
        assert_eq!(
            TopLevel::resolve(false, true, View::Rewards),
            TopLevel::Onboarding
        );
        assert_eq!(TopLevel::resolve(true, false, View::Rewards), TopLevel::Auth);
        assert_eq!(
            TopLevel::resolve(true, true, View::Rewards),
            TopLevel::Main(View::Rewards)
        );
    }

    #[test]
    fn only_schedule_and_tracking_are_full_screen() {
        let full: Vec<_> = [
            View::Home,
            View::Points,
            View::Market,
            View::Rewards,
            View::Profile,
            View::Guide,
            View::Schedule,
            View::Tracking,
        ]
        .into_iter()
        .filter(View::is_full_screen)
        .collect();
        assert_eq!(full, vec![View::Schedule, View::Tracking]);
    }

    #[test]
    fn nav_digits_map_to_bar_order() {
        assert_eq!(View::from_nav_digit('1'), Some(View::Home));
        assert_eq!(View::from_nav_digit('3'), Some(View::Schedule));
        assert_eq!(View::from_nav_digit('5'), Some(View::Profile));
        assert_eq!(View::from_nav_digit('0'), None);
        assert_eq!(View::from_nav_digit('6'), None);
    }

    #[test]
    fn every_title_key_is_translated() {
        let views = [
            View::Home,
            View::Points,
            View::Market,
            View::Rewards,
            View::Profile,
            View::Guide,
            View::Schedule,
            View::Tracking,
        ];
        for lang in [Lang::En, Lang::Ms] {
            for view in views {
                let key = view.title_key();
                assert_ne!(t(lang, key), key, "{view:?} untranslated in {lang:?}");
                assert_ne!(t(lang, view.nav_label_key()), view.nav_label_key());
            }
        }
        assert_eq!(t(Lang::En, View::Tracking.title_key()), "Live Tracking");
    }
}
