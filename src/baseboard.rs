// Baseboard pad tables. Variants swap or extend these through the
// `Variant` trait.

use crate::padcfg::{PadMode, PadPull, PadReset, PadTrigger, RxInvert, PAD_CFG};
use crate::pads::*;
use crate::variant::{FlagGpio, FlagPolarity, FlagRole, FlagSource};

/// ACPI name of the pad controller device the OS queries for the flag
/// GPIOs.
pub const GPIO_DEVICE_NAME: &str = "INTC1055:00";

/// Write-protect sense, read through the host GPIO driver.
pub const WRITE_PROTECT_PAD: PadId = GPP_E15;
/// EC "running RW firmware" sense.
pub const EC_IN_RW_PAD: PadId = GPP_F18;
/// Memory-channel select strap, sampled in bootblock.
pub const MEM_CH_SEL_PAD: PadId = GPP_E13;

/// Ramstage table: the whole board configuration.
///
/// A0-A4, A9 and A10 carry the eSPI link; they come configured out of
/// reset and are left alone. A5, the unused second eSPI alert, is
/// parked instead. Strap pads stay no-connect so their strap values
/// are not disturbed.
pub static GPIO_TABLE: &[PAD_CFG] = &[
    PAD_CFG::nc(GPP_A5, PadPull::None),
    // SPKR_INT_L
    PAD_CFG::gpi(GPP_A6, PadPull::None, PadReset::Deep),
    // WWAN_PCIE_WAKE_ODL
    PAD_CFG::gpi_apic(GPP_A7, PadPull::None, PadReset::PltRst, PadTrigger::Level, RxInvert::Invert),
    // WWAN_RF_DISABLE_ODL
    PAD_CFG::gpo(GPP_A8, 1, PadReset::Deep),
    // EN_SPKR_PA
    PAD_CFG::gpo(GPP_A11, 1, PadReset::Deep),
    // EN_PP3300_WWAN
    PAD_CFG::gpo(GPP_A12, 1, PadReset::Deep),
    // GSC_PCH_INT_ODL
    PAD_CFG::gpi_apic(GPP_A13, PadPull::None, PadReset::PltRst, PadTrigger::Level, RxInvert::Invert),
    // USB_C1_OC_ODL
    PAD_CFG::nf(GPP_A14, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // USB_C2_OC_ODL
    PAD_CFG::nf(GPP_A15, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // USB_A0_OC_ODL
    PAD_CFG::nf(GPP_A16, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // EN_FCAM_PWR
    PAD_CFG::gpo(GPP_A17, 1, PadReset::Deep),
    // HDMI_HPD
    PAD_CFG::nf(GPP_A18, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // USB_C2_AUX_DC_P
    PAD_CFG::nf(GPP_A19, PadPull::None, PadReset::Deep, PadMode::Nf6),
    // USB_C2_AUX_DC_N
    PAD_CFG::nf(GPP_A20, PadPull::None, PadReset::Deep, PadMode::Nf6),
    // USB_C1_AUX_DC_P
    PAD_CFG::nf(GPP_A21, PadPull::None, PadReset::Deep, PadMode::Nf6),
    // USB_C1_AUX_DC_N
    PAD_CFG::nf(GPP_A22, PadPull::None, PadReset::Deep, PadMode::Nf6),
    // AUD_HP_INT_L
    PAD_CFG::gpi_int(GPP_A23, PadPull::None, PadReset::PltRst, PadTrigger::EdgeBoth),

    // SOC_VID0
    PAD_CFG::nf(GPP_B0, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // SOC_VID1
    PAD_CFG::nf(GPP_B1, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // M2_SSD_PLA_L
    PAD_CFG::gpo(GPP_B2, 1, PadReset::PltRst),
    // SAR2_INT_L
    PAD_CFG::gpi_apic(GPP_B3, PadPull::None, PadReset::PltRst, PadTrigger::Level, RxInvert::None),
    // SSD_PERST_L
    PAD_CFG::gpo(GPP_B4, 1, PadReset::Deep),
    // PCH_I2C_MISC_SDA
    PAD_CFG::nf(GPP_B5, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // PCH_I2C_MISC_SCL
    PAD_CFG::nf(GPP_B6, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // PCH_I2C_TPM_SDA
    PAD_CFG::nf(GPP_B7, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // PCH_I2C_TPM_SCL
    PAD_CFG::nf(GPP_B8, PadPull::None, PadReset::Deep, PadMode::Nf2),
    PAD_CFG::nc(GPP_B9, PadPull::None),
    PAD_CFG::nc(GPP_B10, PadPull::None),
    // EN_PP3300_WLAN
    PAD_CFG::gpo(GPP_B11, 1, PadReset::Deep),
    // SLP_S0_L
    PAD_CFG::nf(GPP_B12, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // PLT_RST_L
    PAD_CFG::nf(GPP_B13, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // GPP_B14_STRAP
    PAD_CFG::nc(GPP_B14, PadPull::None),
    // FP_USER_PRES_FP_L
    PAD_CFG::gpi(GPP_B15, PadPull::None, PadReset::PltRst),
    // PCH_I2C_TCHPAD_SDA
    PAD_CFG::nf(GPP_B16, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // PCH_I2C_TCHPAD_SCL
    PAD_CFG::nf(GPP_B17, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // GPP_B18_STRAP
    PAD_CFG::nc(GPP_B18, PadPull::None),
    PAD_CFG::nc(GPP_B19, PadPull::None),
    PAD_CFG::nc(GPP_B20, PadPull::None),
    PAD_CFG::nc(GPP_B21, PadPull::None),
    PAD_CFG::nc(GPP_B22, PadPull::None),
    // PCHHOT_ODL_STRAP
    PAD_CFG::nc(GPP_B23, PadPull::None),

    // EN_PP3300_TCHSCR
    PAD_CFG::gpo(GPP_C0, 1, PadReset::Deep),
    // USI_RST_L
    PAD_CFG::gpo(GPP_C1, 0, PadReset::Deep),
    // GPP_C2_STRAP
    PAD_CFG::nc(GPP_C2, PadPull::None),
    // EN_UCAM_PWR
    PAD_CFG::gpo(GPP_C3, 0, PadReset::Deep),
    // EN_UCAM_SENR_PWR
    PAD_CFG::gpo(GPP_C4, 0, PadReset::Deep),
    // GPP_C5_BOOT_STRAP0
    PAD_CFG::nc(GPP_C5, PadPull::None),
    // USI_REPORT_EN
    PAD_CFG::gpo(GPP_C6, 0, PadReset::Deep),
    // USI_INT
    PAD_CFG::gpi_apic(GPP_C7, PadPull::None, PadReset::PltRst, PadTrigger::Level, RxInvert::None),

    // PCH_FP_BOOT0
    PAD_CFG::nc(GPP_D0, PadPull::None),
    // FP_RST_ODL, held low since bootblock; released here
    PAD_CFG::gpo(GPP_D1, 1, PadReset::Deep),
    // EN_FP_PWR
    PAD_CFG::gpo(GPP_D2, 1, PadReset::Deep),
    // WCAM_RST_L
    PAD_CFG::gpo(GPP_D3, 0, PadReset::Deep),
    // BT_DISABLE_L
    PAD_CFG::gpo(GPP_D4, 1, PadReset::Deep),
    // WWAN_DPR_SAR_ODL
    PAD_CFG::gpo(GPP_D5, 1, PadReset::Deep),
    // SSD_CLKREQ_ODL
    PAD_CFG::nf(GPP_D6, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // WLAN_CLKREQ_ODL
    PAD_CFG::nf(GPP_D7, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // SD_CLKREQ_ODL
    PAD_CFG::nf(GPP_D8, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // USB_C2_LSX_TX
    PAD_CFG::nf(GPP_D9, PadPull::None, PadReset::Deep, PadMode::Nf4),
    // USB_C2_LSX_RX_STRAP
    PAD_CFG::nf(GPP_D10, PadPull::None, PadReset::Deep, PadMode::Nf4),
    // EN_PP3300_SSD
    PAD_CFG::gpo(GPP_D11, 1, PadReset::Deep),
    // GPP_D12_STRAP
    PAD_CFG::nc(GPP_D12, PadPull::None),
    // CAM_PSW_L
    PAD_CFG::gpi_int(GPP_D13, PadPull::None, PadReset::PltRst, PadTrigger::EdgeBoth),
    // SPKR_INT_L
    PAD_CFG::gpi(GPP_D14, PadPull::None, PadReset::Deep),
    // EN_WCAM_SENR_PWR
    PAD_CFG::gpo(GPP_D15, 0, PadReset::Deep),
    // EN_WCAM_PWR
    PAD_CFG::gpo(GPP_D16, 0, PadReset::Deep),
    // SD_PE_PRSNT_L
    PAD_CFG::gpi(GPP_D17, PadPull::None, PadReset::Deep),
    // SD_PE_RST_L
    PAD_CFG::gpo(GPP_D18, 1, PadReset::Deep),
    // I2S_MCLK_R
    PAD_CFG::nf(GPP_D19, PadPull::None, PadReset::Deep, PadMode::Nf1),

    // E0 is ordered at the end of the group; see there.
    // MEM_STRAP_2
    PAD_CFG::gpi(GPP_E1, PadPull::None, PadReset::Deep),
    // MEM_STRAP_1
    PAD_CFG::gpi(GPP_E2, PadPull::None, PadReset::Deep),
    // HPS_INT_ODL
    PAD_CFG::gpi_irq_wake(GPP_E3, PadPull::None, PadReset::PltRst, PadTrigger::Level, RxInvert::None),
    // USB4_BB_RT_FORCE_PWR
    PAD_CFG::gpo(GPP_E4, 0, PadReset::Deep),
    // USB_A0_RT_RST_ODL
    PAD_CFG::gpo(GPP_E5, 1, PadReset::Deep),
    // GPPE6_STRAP
    PAD_CFG::nc(GPP_E6, PadPull::None),
    // EN_HPS_PWR
    PAD_CFG::gpo(GPP_E7, 1, PadReset::Deep),
    // WIFI_DISABLE_L
    PAD_CFG::gpo(GPP_E8, 1, PadReset::Deep),
    // USB_C0_OC_ODL
    PAD_CFG::nf(GPP_E9, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // WWAN_CONFIG0
    PAD_CFG::gpi(GPP_E10, PadPull::None, PadReset::Deep),
    // MEM_STRAP_0
    PAD_CFG::gpi(GPP_E11, PadPull::None, PadReset::Deep),
    // MEM_STRAP_3
    PAD_CFG::gpi(GPP_E12, PadPull::None, PadReset::Deep),
    // MEM_CH_SEL
    PAD_CFG::gpi(GPP_E13, PadPull::None, PadReset::Deep),
    // SOC_EDP_HPD
    PAD_CFG::nf(GPP_E14, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // PCH_WP_OD
    PAD_CFG::gpi_gpio_driver(GPP_E15, PadPull::None, PadReset::Deep),
    // WWAN_RST_L, held low since bootblock; released here
    PAD_CFG::gpo(GPP_E16, 1, PadReset::Deep),
    // WWAN_CONFIG3
    PAD_CFG::gpi(GPP_E17, PadPull::None, PadReset::Deep),
    // USB_C0_LSX_SOC_TX
    PAD_CFG::nf(GPP_E18, PadPull::None, PadReset::Deep, PadMode::Nf4),
    // USB0_C0_LSX_SOC_RX_STRAP
    PAD_CFG::nf(GPP_E19, PadPull::None, PadReset::Deep, PadMode::Nf4),
    // USB_C1_LSX_SOC_TX
    PAD_CFG::nf(GPP_E20, PadPull::None, PadReset::Deep, PadMode::Nf4),
    // USB_C1_LSX_SOC_RX_STRAP
    PAD_CFG::nf(GPP_E21, PadPull::None, PadReset::Deep, PadMode::Nf4),
    // USB_C0_AUX_DC_P
    PAD_CFG::nf(GPP_E22, PadPull::None, PadReset::Deep, PadMode::Nf6),
    // USB_C0_AUX_DC_N
    PAD_CFG::nf(GPP_E23, PadPull::None, PadReset::Deep, PadMode::Nf6),
    // WWAN_PERST_L. Driven high after the rest of the group so that it
    // deasserts after WWAN_RST_L. A PERST# line would normally belong
    // to the platform-reset domain; this one is programmed explicitly
    // during power-down instead, hence the deep-reset domain.
    PAD_CFG::gpo(GPP_E0, 1, PadReset::Deep),

    // CNV_BRI_DT_STRAP
    PAD_CFG::nf(GPP_F0, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // CNV_BRI_RSP
    PAD_CFG::nf(GPP_F1, PadPull::Up20K, PadReset::Deep, PadMode::Nf1),
    // CNV_RGI_DT_STRAP
    PAD_CFG::nf(GPP_F2, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // CNV_RGI_RSP
    PAD_CFG::nf(GPP_F3, PadPull::Up20K, PadReset::Deep, PadMode::Nf1),
    // CNV_RF_RST_L
    PAD_CFG::nf(GPP_F4, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // CNV_CLKREQ0
    PAD_CFG::nf(GPP_F5, PadPull::None, PadReset::Deep, PadMode::Nf3),
    // WWAN_WLAN_COEX3
    PAD_CFG::nf(GPP_F6, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // GPPF7_STRAP
    PAD_CFG::nc(GPP_F7, PadPull::None),
    PAD_CFG::nc(GPP_F8, PadPull::None),
    // SLP_S0_GATE_R
    PAD_CFG::gpo(GPP_F9, 1, PadReset::PltRst),
    // GPPF10_STRAP
    PAD_CFG::nc(GPP_F10, PadPull::Dn20K),
    // GSPI_PCH_CLK_FPMCU_R
    PAD_CFG::nf(GPP_F11, PadPull::None, PadReset::Deep, PadMode::Nf4),
    // GSPI_PCH_DO_FPMCU_DI_R
    PAD_CFG::nf(GPP_F12, PadPull::None, PadReset::Deep, PadMode::Nf4),
    // GSPI_PCH_DI_FPMCU_DO
    PAD_CFG::nf(GPP_F13, PadPull::None, PadReset::Deep, PadMode::Nf4),
    // TCHPAD_INT_ODL
    PAD_CFG::gpi_irq_wake(GPP_F14, PadPull::None, PadReset::PltRst, PadTrigger::Level, RxInvert::Invert),
    // FPMCU_INT_L
    PAD_CFG::gpi_irq_wake(GPP_F15, PadPull::None, PadReset::Deep, PadTrigger::Level, RxInvert::Invert),
    // GSPI_PCH_CS_FPMCU_R_L
    PAD_CFG::nf(GPP_F16, PadPull::None, PadReset::Deep, PadMode::Nf4),
    // EC_PCH_INT_ODL
    PAD_CFG::gpi_irq_wake(GPP_F17, PadPull::None, PadReset::Deep, PadTrigger::Level, RxInvert::Invert),
    // EC_IN_RW_OD
    PAD_CFG::gpi(GPP_F18, PadPull::None, PadReset::Deep),
    // M2_SSD_PLN_L
    PAD_CFG::gpo(GPP_F19, 1, PadReset::PltRst),
    // UCAM_RST_L
    PAD_CFG::gpo(GPP_F20, 0, PadReset::Deep),
    // WWAN_FCPO_L
    PAD_CFG::gpo(GPP_F21, 1, PadReset::Deep),
    PAD_CFG::nc(GPP_F22, PadPull::None),
    PAD_CFG::nc(GPP_F23, PadPull::None),

    // GPPH0_BOOT_STRAP1
    PAD_CFG::nc(GPP_H0, PadPull::None),
    // GPPH1_BOOT_STRAP2
    PAD_CFG::nc(GPP_H1, PadPull::None),
    // GPPH2_BOOT_STRAP3
    PAD_CFG::nc(GPP_H2, PadPull::None),
    // WLAN_PCIE_WAKE_ODL
    PAD_CFG::gpi(GPP_H3, PadPull::None, PadReset::Deep),
    // PCH_I2C_AUD_SDA
    PAD_CFG::nf(GPP_H4, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // PCH_I2C_AUD_SCL
    PAD_CFG::nf(GPP_H5, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // PCH_I2C_TCHSCR_SDA
    PAD_CFG::nf(GPP_H6, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // PCH_I2C_TCHSCR_SCL
    PAD_CFG::nf(GPP_H7, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // WWAN_WLAN_COEX1
    PAD_CFG::nf(GPP_H8, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // WWAN_WLAN_COEX2
    PAD_CFG::nf(GPP_H9, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // UART_PCH_RX_DBG_TX
    PAD_CFG::nf(GPP_H10, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // UART_PCH_TX_DBG_RX
    PAD_CFG::nf(GPP_H11, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // SD_PE_WAKE_ODL
    PAD_CFG::gpi(GPP_H12, PadPull::None, PadReset::Deep),
    // EN_PP3300_SD
    PAD_CFG::nc(GPP_H13, PadPull::Up20K),
    PAD_CFG::nc(GPP_H14, PadPull::None),
    // DDIB_HDMI_CTRLCLK
    PAD_CFG::nf(GPP_H15, PadPull::None, PadReset::Deep, PadMode::Nf1),
    PAD_CFG::nc(GPP_H16, PadPull::None),
    // DDIB_HDMI_CTRLDATA
    PAD_CFG::nf(GPP_H17, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // CPU_C10_GATE_L
    PAD_CFG::nf(GPP_H18, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // SAR1_INT_L
    PAD_CFG::gpi_apic(GPP_H19, PadPull::None, PadReset::PltRst, PadTrigger::Level, RxInvert::None),
    // WLAN_PERST_L
    PAD_CFG::gpo(GPP_H20, 1, PadReset::Deep),
    // UCAM_MCLK
    PAD_CFG::gpo(GPP_H21, 0, PadReset::Deep),
    // WCAM_MCLK_R
    PAD_CFG::nf(GPP_H22, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // WWAN_CLKREQ_ODL
    PAD_CFG::nf(GPP_H23, PadPull::None, PadReset::Deep, PadMode::Nf2),

    // I2S_HP_SCLK_R
    PAD_CFG::nf(GPP_R0, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // I2S_HP_SFRM_R
    PAD_CFG::nf(GPP_R1, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // I2S_PCH_TX_HP_RX_STRAP
    PAD_CFG::nf(GPP_R2, PadPull::Dn20K, PadReset::Deep, PadMode::Nf2),
    // I2S_PCH_RX_HP_TX
    PAD_CFG::nf(GPP_R3, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // I2S_SPKR_SCLK_R
    PAD_CFG::nf(GPP_R4, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // I2S_SPKR_SFRM_R
    PAD_CFG::nf(GPP_R5, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // I2S_PCH_TX_SPKR_RX_R
    PAD_CFG::nf(GPP_R6, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // I2S_PCH_RX_SPKR_TX
    PAD_CFG::nf(GPP_R7, PadPull::None, PadReset::Deep, PadMode::Nf2),

    // SDW_HP_CLK_R
    PAD_CFG::nf(GPP_S0, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // SDW_HP_DATA_R
    PAD_CFG::nf(GPP_S1, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // DMIC_CLK0_R
    PAD_CFG::nf(GPP_S2, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // DMIC_DATA0_R
    PAD_CFG::nf(GPP_S3, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // SDW_SPKR_CLK
    PAD_CFG::nf(GPP_S4, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // SDW_SPKR_DATA
    PAD_CFG::nf(GPP_S5, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // DMIC_CLK1_R
    PAD_CFG::nf(GPP_S6, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // DMIC_DATA1_R
    PAD_CFG::nf(GPP_S7, PadPull::None, PadReset::Deep, PadMode::Nf2),

    // BATLOW_L
    PAD_CFG::nf(GPD0, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // PCH_ACPRESENT
    PAD_CFG::nf(GPD1, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // EC_PCH_WAKE_ODL
    PAD_CFG::nf(GPD2, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // EC_PCH_PWR_BTN_ODL
    PAD_CFG::nf(GPD3, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // SLP_S3_L
    PAD_CFG::nf(GPD4, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // SLP_S4_L
    PAD_CFG::nf(GPD5, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // SLP_A_L
    PAD_CFG::nf(GPD6, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // GPD7_STRAP
    PAD_CFG::nc(GPD7, PadPull::None),
    // PCH_SUSCLK
    PAD_CFG::nf(GPD8, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // SLP_WLAN_L
    PAD_CFG::nf(GPD9, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // SLP_S5_L
    PAD_CFG::nf(GPD10, PadPull::None, PadReset::Deep, PadMode::Nf1),
    // WWAN_CONFIG1
    PAD_CFG::gpi(GPD11, PadPull::None, PadReset::Deep),

    // Unused CNVi BT UART wires, parked while the USB transport is in
    // use.
    PAD_CFG::nc(GPP_VGPIO_6, PadPull::None),
    PAD_CFG::nc(GPP_VGPIO_7, PadPull::None),
    PAD_CFG::nc(GPP_VGPIO_8, PadPull::None),
    PAD_CFG::nc(GPP_VGPIO_9, PadPull::None),
    // Unused CNVi UART0 wires, same reason.
    PAD_CFG::nc(GPP_VGPIO_18, PadPull::None),
    PAD_CFG::nc(GPP_VGPIO_19, PadPull::None),
    PAD_CFG::nc(GPP_VGPIO_20, PadPull::None),
    PAD_CFG::nc(GPP_VGPIO_21, PadPull::None),
];

/// Bootblock table: TPM and debug console plumbing, the memory-channel
/// strap, and the lines whose power sequencing starts early.
pub static EARLY_GPIO_TABLE: &[PAD_CFG] = &[
    // EN_PPVAR_WWAN
    PAD_CFG::gpo(GPP_A12, 1, PadReset::Deep),
    // GSC_PCH_INT_ODL
    PAD_CFG::gpi_apic(GPP_A13, PadPull::None, PadReset::PltRst, PadTrigger::Level, RxInvert::Invert),
    // SSD_PERST_L, asserted until ramstage
    PAD_CFG::gpo(GPP_B4, 0, PadReset::Deep),
    // PCH_I2C_TPM_SDA
    PAD_CFG::nf(GPP_B7, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // PCH_I2C_TPM_SCL
    PAD_CFG::nf(GPP_B8, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // FP_RST_ODL comes out of reset floating, with no external
    // pull-down. Drive it low before EN_FP_PWR brings the module up;
    // ramstage releases it. Consequence: the module stays in reset
    // across an S3 resume. Known limitation.
    PAD_CFG::gpo(GPP_D1, 0, PadReset::Deep),
    // EN_FP_PWR
    PAD_CFG::gpo(GPP_D2, 1, PadReset::Deep),
    // MEM_CH_SEL
    PAD_CFG::gpi(GPP_E13, PadPull::None, PadReset::Deep),
    // WWAN_RST_L stays low this early to satisfy the modem's reset
    // timing; ramstage deasserts it.
    PAD_CFG::gpo(GPP_E16, 0, PadReset::Deep),
    // PCH_WP_OD
    PAD_CFG::gpi_gpio_driver(GPP_E15, PadPull::None, PadReset::Deep),
    // UART_PCH_RX_DBG_TX
    PAD_CFG::nf(GPP_H10, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // UART_PCH_TX_DBG_RX
    PAD_CFG::nf(GPP_H11, PadPull::None, PadReset::Deep, PadMode::Nf2),
    // EN_PP3300_SD
    PAD_CFG::nc(GPP_H13, PadPull::Up20K),
];

/// Romstage adds no pads on this board.
pub static ROMSTAGE_GPIO_TABLE: &[PAD_CFG] = &[];

/// The baseboard carries no overrides; variants hook this.
pub static OVERRIDE_GPIO_TABLE: &[PAD_CFG] = &[];

/// Firmware-flag GPIOs exported to the OS.
pub static FLAG_GPIOS: &[FlagGpio] = &[
    FlagGpio {
        role: FlagRole::Recovery,
        polarity: FlagPolarity::ActiveLow,
        source: FlagSource::Virtual,
        device: GPIO_DEVICE_NAME,
    },
    FlagGpio {
        role: FlagRole::WriteProtect,
        polarity: FlagPolarity::ActiveHigh,
        source: FlagSource::Pad(WRITE_PROTECT_PAD),
        device: GPIO_DEVICE_NAME,
    },
];
