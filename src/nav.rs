//! Screen navigation as an explicit state machine.

use crate::bank::{Topic, TopicFamily};

/// The two equation modes that go through topic selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquationMode {
    Balancing,
    Building,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
    /// Practice mode 1.
    FormulaPractice,
    TopicSelect { mode: EquationMode },
    TopicSelectSub { mode: EquationMode, family: TopicFamily },
    /// Practice mode 2.
    Balancing { topic: Topic },
    /// Practice mode 3.
    Building { topic: Topic },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    LoggedIn,
    LoggedOut,
    OpenFormulaPractice,
    OpenBalancing,
    OpenBuilding,
    ChooseFamily(TopicFamily),
    ChooseTopic(Topic),
    Back,
    RoundFinished,
}

impl Screen {
    pub fn initial() -> Self {
        Screen::Login
    }

    /// Next screen for `event`, or `None` if the event means nothing here.
    pub fn transition(self, event: NavEvent) -> Option<Screen> {
        use NavEvent::*;
        use Screen::*;

        match (self, event) {
            (Login, LoggedIn) => Some(Home),
            (Login, _) => None,
            (_, LoggedOut) => Some(Login),

            (Home, OpenFormulaPractice) => Some(FormulaPractice),
            (Home, OpenBalancing) => Some(TopicSelect {
                mode: EquationMode::Balancing,
            }),
            (Home, OpenBuilding) => Some(TopicSelect {
                mode: EquationMode::Building,
            }),

            (FormulaPractice, Back) => Some(Home),

            (TopicSelect { mode }, ChooseFamily(family)) => Some(TopicSelectSub { mode, family }),
            (TopicSelect { .. }, Back) => Some(Home),

            (TopicSelectSub { mode, family }, ChooseTopic(topic)) if topic.family() == family => {
                Some(match mode {
                    EquationMode::Balancing => Balancing { topic },
                    EquationMode::Building => Building { topic },
                })
            }
            (TopicSelectSub { mode, .. }, Back) => Some(TopicSelect { mode }),

            (Balancing { topic }, Back | RoundFinished) => Some(TopicSelectSub {
                mode: EquationMode::Balancing,
                family: topic.family(),
            }),
            (Building { topic }, Back | RoundFinished) => Some(TopicSelectSub {
                mode: EquationMode::Building,
                family: topic.family(),
            }),

            _ => None,
        }
    }

    /// Applies `event`, staying put when it is not valid here.
    pub fn apply(self, event: NavEvent) -> Screen {
        self.transition(event).unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_gates_everything() {
        assert_eq!(Screen::initial(), Screen::Login);
        assert_eq!(Screen::Login.transition(NavEvent::OpenBalancing), None);
        assert_eq!(Screen::Login.transition(NavEvent::LoggedOut), None);
        assert_eq!(Screen::Login.transition(NavEvent::LoggedIn), Some(Screen::Home));
    }

    #[test]
    fn builder_path_through_topics() {
        let s = Screen::Home
            .apply(NavEvent::OpenBuilding)
            .apply(NavEvent::ChooseFamily(TopicFamily::Redox))
            .apply(NavEvent::ChooseTopic(Topic::RedoxHalf));
        assert_eq!(s, Screen::Building { topic: Topic::RedoxHalf });

        let s = s.apply(NavEvent::RoundFinished);
        assert_eq!(
            s,
            Screen::TopicSelectSub {
                mode: EquationMode::Building,
                family: TopicFamily::Redox
            }
        );
        let s = s.apply(NavEvent::Back).apply(NavEvent::Back);
        assert_eq!(s, Screen::Home);
    }

    #[test]
    fn topic_must_belong_to_family() {
        let sub = Screen::TopicSelectSub {
            mode: EquationMode::Balancing,
            family: TopicFamily::General,
        };
        assert_eq!(sub.transition(NavEvent::ChooseTopic(Topic::RedoxFull)), None);
        assert_eq!(
            sub.transition(NavEvent::ChooseTopic(Topic::Acids)),
            Some(Screen::Balancing { topic: Topic::Acids })
        );
    }

    #[test]
    fn logout_from_anywhere() {
        for s in [
            Screen::Home,
            Screen::FormulaPractice,
            Screen::Balancing { topic: Topic::Metals },
            Screen::TopicSelect { mode: EquationMode::Building },
        ] {
            assert_eq!(s.transition(NavEvent::LoggedOut), Some(Screen::Login));
        }
    }

    #[test]
    fn invalid_events_keep_screen() {
        assert_eq!(Screen::Home.transition(NavEvent::Back), None);
        assert_eq!(Screen::FormulaPractice.apply(NavEvent::OpenBuilding), Screen::FormulaPractice);
        assert_eq!(Screen::Home.transition(NavEvent::RoundFinished), None);
    }
}
