use super::*;

fn configured() -> OriginList {
    OriginList::parse("http://localhost:3000,https://example.com")
}

mod cors_decision {
    use super::*;

    #[test]
    fn deny_should_carry_no_header_values() {
        // Arrange & Act
        let decision = CorsDecision::deny();

        // Assert
        assert!(!decision.allowed);
        assert_eq!(decision.allow_origin, None);
        assert!(!decision.allow_credentials);
        assert!(!decision.varies_by_origin());
    }

    #[test]
    fn when_wildcard_echoed_should_not_vary_by_origin() {
        assert!(!CorsDecision::allow("*", false).varies_by_origin());
        assert!(CorsDecision::allow("https://a.test", false).varies_by_origin());
    }
}

mod decide {
    use super::*;

    #[test]
    fn when_origin_is_listed_should_echo_it() {
        // Arrange
        let origins = configured();
        let matcher = OriginMatcher::new(&origins, true);

        // Act
        let decision = matcher.decide("https://example.com");

        // Assert
        assert_eq!(decision, CorsDecision::allow("https://example.com", true));
    }

    #[test]
    fn when_origin_is_not_listed_should_deny() {
        // Arrange
        let origins = configured();
        let matcher = OriginMatcher::new(&origins, true);

        // Act
        let decision = matcher.decide("http://evil.example");

        // Assert
        assert_eq!(decision, CorsDecision::deny());
    }

    #[test]
    fn should_match_case_sensitively() {
        // Arrange
        let origins = configured();
        let matcher = OriginMatcher::new(&origins, true);

        // Act
        let decision = matcher.decide("https://EXAMPLE.com");

        // Assert
        assert!(!decision.allowed);
    }

    #[test]
    fn should_not_normalize_default_ports() {
        // Arrange
        let origins = OriginList::parse("http://x.test");
        let matcher = OriginMatcher::new(&origins, false);

        // Act
        let decision = matcher.decide("http://x.test:80");

        // Assert
        assert!(!decision.allowed);
    }

    #[test]
    fn when_origin_is_empty_should_deny() {
        // Arrange
        let origins = OriginList::allow_all();
        let matcher = OriginMatcher::new(&origins, false);

        // Act
        let decision = matcher.decide("");

        // Assert
        assert_eq!(decision, CorsDecision::deny());
    }

    #[test]
    fn when_list_is_disabled_should_deny_even_wildcard_origin() {
        // Arrange
        let origins = OriginList::parse("");
        let matcher = OriginMatcher::new(&origins, true);

        // Act
        let decision = matcher.decide("*");

        // Assert
        assert_eq!(decision, CorsDecision::deny());
    }

    #[test]
    fn when_allow_all_without_credentials_should_echo_wildcard() {
        // Arrange
        let origins = OriginList::allow_all();
        let matcher = OriginMatcher::new(&origins, false);

        // Act
        let decision = matcher.decide("https://any.test");

        // Assert
        assert_eq!(decision, CorsDecision::allow("*", false));
    }

    #[test]
    fn when_allow_all_with_credentials_should_echo_request_origin() {
        // Arrange
        let origins = OriginList::allow_all();
        let matcher = OriginMatcher::new(&origins, true);

        // Act
        let decision = matcher.decide("https://any.test");

        // Assert
        assert_eq!(decision, CorsDecision::allow("https://any.test", true));
    }

    #[test]
    fn when_request_origin_is_wildcard_should_deny() {
        // Arrange
        let origins = OriginList::allow_all();

        // Act
        let with_credentials = OriginMatcher::new(&origins, true).decide("*");
        let without_credentials = OriginMatcher::new(&origins, false).decide("*");

        // Assert
        assert_eq!(with_credentials, CorsDecision::deny());
        assert_eq!(without_credentials, CorsDecision::deny());
    }

    #[test]
    fn when_allow_all_with_credentials_should_never_echo_wildcard() {
        // Arrange
        let origins = OriginList::allow_all();
        let matcher = OriginMatcher::new(&origins, true);

        for origin in ["*", "http://a.test", "null", "https://b.test:8443"] {
            // Act
            let decision = matcher.decide(origin);

            // Assert
            assert_ne!(decision.allow_origin.as_deref(), Some("*"), "origin {origin:?}");
            if decision.allowed {
                assert!(decision.varies_by_origin());
            }
        }
    }

    #[test]
    fn when_origin_exceeds_length_limit_should_deny() {
        // Arrange
        let origin = format!("https://{}.test", "a".repeat(MAX_ORIGIN_LENGTH));
        let origins = OriginList::allow_all();
        let matcher = OriginMatcher::new(&origins, false);

        // Act
        let decision = matcher.decide(&origin);

        // Assert
        assert!(!decision.allowed);
    }
}
