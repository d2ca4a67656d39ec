use crate::state::view::View;
use ewaste_data::PickupId;

/// Commands to execute (user actions → state transitions and effects)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,

    // Navigation
    Navigate(View),
    NavigateBack,

    // Onboarding / auth
    NextOnboardingStep,
    PreviousOnboardingStep,
    ToggleAuthMode,
    Logout,

    // Whichever form currently has focus
    NavigateFormField { forward: bool },
    AppendFormFieldChar(char),
    DeleteFormFieldChar,
    ClearFormField,
    ToggleFormOption,
    SubmitForm,
    CancelForm,

    // Map picker inside the focused form
    MovePin { dx: i8, dy: i8 },
    DropPin,

    // Collection points filter
    EnterFilterMode,
    ExitFilterMode,
    AppendFilterChar(char),
    DeleteFilterChar,
    ClearFilter,

    // Home
    ActivateQuickAction,
    TrackActivePickup,

    // External links for the selected entry
    CallSelected,
    EmailSelected,
    OpenDirections,
    OpenMapPreview,
    CallDriver,
    CallSupport,
    EmailSupport,
    WhatsAppSupport,

    // Marketplace
    OpenListingForm,
    AttachListingImage,
    RemoveListingImage,

    // Rewards
    SwitchRewardsTab,
    RedeemSelectedReward,
    OpenCashOut,
    AdjustCashOutPoints { increase: bool },
    CyclePaymentMethod { forward: bool },
    StartQrScan,
    ShowMyQr,
    CloseOverlay,

    // Profile
    OpenProfileItem,
    ToggleSelectedSetting,
    StartAddingItem,
    DeleteSelectedItem,
    ToggleFaqEntry,

    // Schedule
    UseSelectedLocation,
    OpenLocationEditor { edit: bool },
    RequestLocationDelete,
    ConfirmLocationDelete,
    CancelLocationDelete,
    ToggleDriverArrived,

    DismissNotice,

    // System
    ToggleHelp,
    SetPendingKey(char),
    ClearPendingKey,
    Quit,
}

/// Results of background timers, folded into state by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataEvent {
    TrackingTick { pickup_id: PickupId },
    QrScanCompleted,
}

/// Side effects a command asks the runtime to perform. Executing a command
/// never performs them itself, so the same executor serves the tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenExternal(String),
    StartTrackingTicker { pickup_id: PickupId },
    StopTrackingTicker,
    StartQrScan,
    CancelQrScan,
}
