use serde::{Deserialize, Serialize};

/// UI language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ms,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ms => "ms",
        }
    }

    /// Name of the language in that language
    pub fn label(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ms => "Bahasa Melayu",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::Ms,
            Self::Ms => Self::En,
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => EN,
            Self::Ms => MS,
        }
    }
}

/// Look up the label for `key`, falling back to the key itself
pub fn t(lang: Lang, key: &str) -> &str {
    lang.table()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

const EN: &[(&str, &str)] = &[
    ("home", "Home"),
    ("points", "Points"),
    ("market", "Market"),
    ("rewards", "Rewards"),
    ("profile", "Profile"),
    ("schedulePickup", "Schedule Pickup"),
    ("collectionPoints", "Collection Points"),
    ("sellEwaste", "Sell E-Waste"),
    ("guide", "3R Guide"),
    ("liveTracking", "Live Tracking"),
    ("hi", "Hi"),
    ("readyToRecycle", "Ready to recycle today?"),
    ("recentPickups", "Recent Pickups"),
    ("call", "Call"),
    ("email", "Email"),
    ("directions", "Directions"),
    ("editProfile", "Edit Profile"),
    ("saveChanges", "Save Changes"),
    ("notifications", "Notifications"),
    ("darkMode", "Dark Mode"),
    ("language", "Language"),
    ("privacy", "Privacy & Security"),
    ("appSettings", "App Settings"),
    ("signOut", "Sign Out"),
    ("welcomeBack", "Welcome Back"),
    ("createAccount", "Create Account"),
    ("signIn", "Sign In"),
    ("signUp", "Sign Up"),
    ("myRewards", "My Rewards"),
    ("catalog", "Catalog"),
    ("availablePoints", "Available Points"),
    ("redeem", "Redeem"),
    ("needPoints", "Need Points"),
    ("useNow", "Use Now"),
    ("claimedOn", "Claimed on"),
    ("myLocations", "My Locations"),
    ("addNewLocation", "Add New Location"),
    ("loadingMap", "Loading map..."),
    ("savedLocations", "Saved Locations"),
    ("pickupHistory", "Pickup History"),
    ("partnershipProgram", "Partnership Program"),
    ("helpSupport", "Help & Support"),
    ("partnerHeroTitle", "Partner with ewaste2go"),
    ("partnerHeroDesc", "Join Sabah's leading e-waste management network. Connect with users, boost your sustainability impact, and grow your business."),
    ("partnershipBenefits", "Partnership Benefits"),
    ("visibility", "Visibility"),
    ("visibilityDesc", "Featured listing in our Collection Points directory"),
    ("marketingSupport", "Marketing Support"),
    ("marketingDesc", "Co-branded promotional materials and social media exposure"),
    ("userBaseAccess", "User Base Access"),
    ("userBaseDesc", "Connect with eco-conscious users in Sabah"),
    ("dataInsights", "Data Insights"),
    ("dataDesc", "Monthly reports on e-waste collection volumes"),
    ("applyPartnership", "Apply for Partnership"),
    ("companyName", "Company Name"),
    ("contactPerson", "Contact Person"),
    ("message", "Message"),
    ("tellUsInterest", "Tell us about your interest..."),
    ("submitApplication", "Submit Application"),
    ("questions", "Questions?"),
    ("helpCenter", "Help Center"),
    ("contactUs", "Contact Us"),
    ("callUs", "Call Us"),
    ("emailSupport", "Email Support"),
    ("whatsapp", "WhatsApp"),
    ("faq", "Frequently Asked Questions"),
    ("supportHours", "Support Hours"),
    ("totalPickups", "Total Pickups"),
    ("itemsRecycled", "Items Recycled"),
    ("rewardPoints", "Reward Points"),
    ("name", "Name"),
    ("phone", "Phone Number"),
    ("cashOut", "Cash Out"),
    ("paymentMethods", "Payment Methods"),
    ("convertPoints", "Convert Points to Cash"),
    ("amountToWithdraw", "Points to Convert"),
    ("selectPaymentMethod", "Select Payment Method"),
    ("conversionRate", "Rate: 100 Points = RM 10.00"),
    ("insufficientPoints", "Insufficient Points"),
    ("withdrawSuccess", "Cash Out Successful!"),
    ("addPaymentMethod", "Add Payment Method"),
    ("provider", "Provider (Bank/E-Wallet)"),
    ("accountNumber", "Account Number"),
    ("accountHolder", "Account Holder Name"),
    ("saveMethod", "Save Payment Method"),
    ("cashReceived", "Cash Received"),
    ("noPaymentMethods", "No payment methods added."),
    ("bankTransfer", "Bank Transfer"),
    ("ewallet", "E-Wallet"),
    ("bankName", "Bank Name"),
    ("ewalletProvider", "E-Wallet Provider"),
];

const MS: &[(&str, &str)] = &[
    ("home", "Utama"),
    ("points", "Lokasi"),
    ("market", "Pasaran"),
    ("rewards", "Ganjaran"),
    ("profile", "Profil"),
    ("schedulePickup", "Jadualkan Pengambilan"),
    ("collectionPoints", "Pusat Pengumpulan"),
    ("sellEwaste", "Jual E-Sisa"),
    ("guide", "Panduan 3R"),
    ("liveTracking", "Penjejakan Langsung"),
    ("hi", "Hai"),
    ("readyToRecycle", "Sedia untuk kitar semula?"),
    ("recentPickups", "Pengambilan Terkini"),
    ("call", "Telefon"),
    ("email", "E-mel"),
    ("directions", "Arah"),
    ("editProfile", "Edit Profil"),
    ("saveChanges", "Simpan Perubahan"),
    ("notifications", "Notifikasi"),
    ("darkMode", "Mod Gelap"),
    ("language", "Bahasa"),
    ("privacy", "Privasi & Keselamatan"),
    ("appSettings", "Tetapan Aplikasi"),
    ("signOut", "Log Keluar"),
    ("welcomeBack", "Selamat Kembali"),
    ("createAccount", "Cipta Akaun"),
    ("signIn", "Log Masuk"),
    ("signUp", "Daftar"),
    ("myRewards", "Ganjaran Saya"),
    ("catalog", "Katalog"),
    ("availablePoints", "Mata Terkumpul"),
    ("redeem", "Tebus"),
    ("needPoints", "Mata Tak Cukup"),
    ("useNow", "Guna"),
    ("claimedOn", "Ditebus pada"),
    ("myLocations", "Lokasi Saya"),
    ("addNewLocation", "Tambah Lokasi Baru"),
    ("loadingMap", "Memuatkan peta..."),
    ("savedLocations", "Lokasi Disimpan"),
    ("pickupHistory", "Sejarah Pengambilan"),
    ("partnershipProgram", "Program Rakan Kongsi"),
    ("helpSupport", "Bantuan & Sokongan"),
    ("partnerHeroTitle", "Rakan Kongsi ewaste2go"),
    ("partnerHeroDesc", "Sertai rangkaian pengurusan e-sisa terkemuka Sabah. Berhubung dengan pengguna, tingkatkan impak kelestarian, dan kembangkan perniagaan anda."),
    ("partnershipBenefits", "Faedah Rakan Kongsi"),
    ("visibility", "Keterlihatan"),
    ("visibilityDesc", "Penyenaraian utama dalam direktori Pusat Pengumpulan kami"),
    ("marketingSupport", "Sokongan Pemasaran"),
    ("marketingDesc", "Bahan promosi bersama dan pendedahan media sosial"),
    ("userBaseAccess", "Akses Pangkalan Pengguna"),
    ("userBaseDesc", "Berhubung dengan pengguna yang peka alam sekitar di Sabah"),
    ("dataInsights", "Wawasan Data"),
    ("dataDesc", "Laporan bulanan mengenai jumlah pengumpulan e-sisa"),
    ("applyPartnership", "Mohon Rakan Kongsi"),
    ("companyName", "Nama Syarikat"),
    ("contactPerson", "Orang Untuk Dihubungi"),
    ("message", "Mesej"),
    ("tellUsInterest", "Beritahu kami tentang minat anda..."),
    ("submitApplication", "Hantar Permohonan"),
    ("questions", "Soalan?"),
    ("helpCenter", "Pusat Bantuan"),
    ("contactUs", "Hubungi Kami"),
    ("callUs", "Hubungi Kami"),
    ("emailSupport", "Sokongan E-mel"),
    ("whatsapp", "WhatsApp"),
    ("faq", "Soalan Lazim"),
    ("supportHours", "Waktu Operasi Sokongan"),
    ("totalPickups", "Jumlah Pengambilan"),
    ("itemsRecycled", "Barang Dikitar Semula"),
    ("rewardPoints", "Mata Ganjaran"),
    ("name", "Nama"),
    ("phone", "Nombor Telefon"),
    ("cashOut", "Tunai Keluar"),
    ("paymentMethods", "Kaedah Pembayaran"),
    ("convertPoints", "Tukar Mata ke Tunai"),
    ("amountToWithdraw", "Mata untuk Ditukar"),
    ("selectPaymentMethod", "Pilih Kaedah Pembayaran"),
    ("conversionRate", "Kadar: 100 Mata = RM 10.00"),
    ("insufficientPoints", "Mata Tidak Mencukupi"),
    ("withdrawSuccess", "Pengeluaran Berjaya!"),
    ("addPaymentMethod", "Tambah Kaedah Pembayaran"),
    ("provider", "Penyedia (Bank/E-Dompet)"),
    ("accountNumber", "Nombor Akaun"),
    ("accountHolder", "Nama Pemegang Akaun"),
    ("saveMethod", "Simpan Kaedah"),
    ("cashReceived", "Tunai Diterima"),
    ("noPaymentMethods", "Tiada kaedah pembayaran."),
    ("bankTransfer", "Pindahan Bank"),
    ("ewallet", "E-Dompet"),
    ("bankName", "Nama Bank"),
    ("ewalletProvider", "Penyedia E-Dompet"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn resolves_both_languages() {
        assert_eq!(t(Lang::En, "home"), "Home");
        assert_eq!(t(Lang::Ms, "home"), "Utama");
        assert_eq!(t(Lang::Ms, "cashOut"), "Tunai Keluar");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Lang::En, "noSuchLabel"), "noSuchLabel");
        assert_eq!(t(Lang::Ms, ""), "");
    }

    #[test]
    fn both_tables_cover_the_same_keys() {
        let en: HashSet<_> = EN.iter().map(|(k, _)| *k).collect();
        let ms: HashSet<_> = MS.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, ms);
        assert_eq!(en.len(), EN.len());
    }

    #[test]
    fn toggle_switches_language() {
        assert_eq!(Lang::En.toggle(), Lang::Ms);
        assert_eq!(Lang::Ms.toggle().code(), "en");
    }
}
